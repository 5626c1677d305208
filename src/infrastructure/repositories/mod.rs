pub mod polly_synthesis_task_repository;
pub mod synthesis_task_repository;

pub use polly_synthesis_task_repository::PollySynthesisTaskRepository;
pub use synthesis_task_repository::SynthesisTaskRepository;

pub mod synthesis_task;

pub mod list_pipeline;

pub mod cli;
pub mod conf;
pub mod ingest;
pub mod logging;
pub mod measure;
pub mod memstats;
pub mod render;
pub mod runtime;
pub mod scheduler;

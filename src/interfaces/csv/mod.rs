pub mod plan_reader;

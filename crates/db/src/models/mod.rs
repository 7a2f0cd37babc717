pub mod nurse;

pub mod sample_events;

pub mod fixture_writer;

pub use fixture_writer::FixtureWriter;

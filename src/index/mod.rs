pub mod inverted;
pub mod posting;
pub mod index_writer;
pub mod serializer;

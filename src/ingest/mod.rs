mod csv_reader;

pub use csv_reader::parse_points;

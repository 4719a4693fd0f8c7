mod results_table;

pub use results_table::ResultsTableExtractor;

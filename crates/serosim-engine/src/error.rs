//! Errors raised while loading configuration and data or running a mode.

/// Errors that can occur in the engine binary.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Reading a configuration or data file failed.
    #[error("i/o error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// A CSV table could not be read or deserialized.
    #[error("csv error: {source}")]
    Csv {
        /// The underlying CSV error.
        #[from]
        source: csv::Error,
    },

    /// The YAML configuration could not be parsed.
    #[error("config error: {source}")]
    Config {
        /// The underlying YAML error.
        #[from]
        source: serde_yml::Error,
    },

    /// A calendar date in a data table could not be parsed.
    #[error("date parse error: {source}")]
    Date {
        /// The underlying date-parse error.
        #[from]
        source: chrono::ParseError,
    },

    /// The baseline objective evaluation failed.
    #[error("inference error: {source}")]
    Inference {
        /// The underlying inference error.
        #[from]
        source: serosim_inference::InferenceError,
    },

    /// A data table contained no usable rows.
    #[error("empty {what} table")]
    EmptyTable {
        /// Which table was empty.
        what: &'static str,
    },

    /// A grid sweep found no feasible grid point.
    #[error("grid search found no feasible parameters")]
    NoFeasibleFit,
}

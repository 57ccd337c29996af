pub mod subconverter;

pub use subconverter::{
    subconverter, ConvertError, ConvertReport, SourceText, SubconverterConfig,
    SubconverterConfigBuilder, SubconverterResult,
};

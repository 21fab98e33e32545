use clap::ValueEnum;
use embedify_core::Style;

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
pub enum NamingArg {
    Pascal,
    Snake,
}

impl From<NamingArg> for Style {
    fn from(arg: NamingArg) -> Self {
        match arg {
            NamingArg::Pascal => Self::Pascal,
            NamingArg::Snake => Self::Snake,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
pub enum OutputFormat {
    Summary,
    Json,
}

impl From<OutputFormat> for embedify_core::OutputFormat {
    fn from(arg: OutputFormat) -> Self {
        match arg {
            OutputFormat::Summary => Self::Summary,
            OutputFormat::Json => Self::Json,
        }
    }
}

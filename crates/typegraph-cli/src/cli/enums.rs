use clap::ValueEnum;
use typegraph_core::PrimitivePolicy;

/// Treatment of value types when deriving referenced names
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum PrimitivesArg {
    /// Follow the boxed type (int becomes java.lang.Integer)
    #[value(name = "box")]
    Box,

    /// Never follow value types
    #[value(name = "drop")]
    Drop,
}

impl From<PrimitivesArg> for PrimitivePolicy {
    fn from(arg: PrimitivesArg) -> Self {
        match arg {
            PrimitivesArg::Box => PrimitivePolicy::Boxed,
            PrimitivesArg::Drop => PrimitivePolicy::Dropped,
        }
    }
}

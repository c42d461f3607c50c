mod check;
mod query;
mod render;
mod spec;

pub use check::IsaCheck;
pub use query::IsaQuery;
pub use render::{Format, IsaRender};
pub use spec::{LayoutArg, SpecArgs};

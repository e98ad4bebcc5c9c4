//! Page widgets: testimonial carousel, portfolio filter, fullscreen menu and
//! hero statistics counter.

mod carousel;
mod filter;
mod menu;
mod stats;

pub use carousel::{
    AutoAdvance,
    Carousel,
};
pub use filter::{
    PortfolioFilter,
    ScheduledReveal,
};
pub use menu::Menu;
pub use stats::{
    CounterState,
    StatsCounter,
};

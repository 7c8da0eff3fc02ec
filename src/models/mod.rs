//! Simulation domain models.
//!
//! Provides the data types shared by every scheduling driver: the
//! process batch going in and the timeline coming out.
//!
//! # Domain Mappings
//!
//! | u-cpu-schedule | Classical OS texts |
//! |----------------|--------------------|
//! | Process | Job / PCB |
//! | TimeSlice | Gantt chart bar |
//! | Timeline | Gantt chart |

mod process;
mod timeline;

pub use process::Process;
pub use timeline::{TimeSlice, Timeline};

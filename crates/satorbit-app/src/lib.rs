//! Orbit viewer application: catalog selection, scene composition, and
//! the renderers the command-line tool hands scenes to.

pub mod pipeline;
pub mod platform;
pub mod summary;

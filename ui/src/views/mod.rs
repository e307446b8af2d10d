mod samples;
pub use samples::Samples;

mod sites;
pub use sites::Sites;

//! Business logic services

pub mod clock;
pub mod dashboard;
pub mod id_generator;
pub mod photo;
pub mod preview;
pub mod receipt;
pub mod simulation;
pub mod submission;

pub use clock::{Clock, FixedClock, SharedClock, SystemClock};
pub use dashboard::{DashboardService, ExportFile};
pub use preview::{PreviewHandle, PreviewState};
pub use simulation::{start_ambient_simulation, AmbientSimulation, SimulationState};
pub use submission::SubmissionService;

mod id;
mod line;
mod section;
mod sections;
mod station;

pub use id::{IdSequence, LineId, SectionId, StationId};
pub use line::{Line, LineStations};
pub use section::{Distance, Section};
pub use sections::{SectionChanges, Sections, SectionsUpdate};
pub use station::Station;

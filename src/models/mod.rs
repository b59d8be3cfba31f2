mod breeder;
mod fitness;
mod individual;
mod metrics;
mod mutagen;
mod population;
mod robot;
mod schedule;
mod selector;
mod vector;

pub use fitness::{EPSILON, fitness_from_distance};
pub use individual::{Gene, Individual, VELOCITY_MULTIPLIER};
pub use metrics::Metrics;
pub use mutagen::{
    MUTATION_RATE, Mutagen, MutationMode, MutationRate, MutationRateOutOfRange,
    UnknownMutationMode,
};
pub use population::Population;
pub use robot::Robot;
pub use schedule::{Schedule, ScheduleDecision};
pub use selector::{SelectionError, Selector};
pub use vector::{Position, Vector2, Velocity};

pub(crate) use breeder::Breeder;

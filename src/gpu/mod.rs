// these modules are re-exported as a single module

pub use self::modes::*;
mod modes;

pub use self::sequencer::*;
mod sequencer;

pub use self::cirrus::*;
mod cirrus;

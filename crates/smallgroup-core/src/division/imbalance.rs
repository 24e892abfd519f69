//! "One versus many" gender warning.
//!
//! A group is flagged when exactly one member of one gender sits with more than
//! one member of the other. This is a display warning; the optimizer only
//! consults it to break ties between equally good swaps.

use crate::division::Composition;
use crate::models::{Gender, Member};

pub fn is_flagged(composition: &Composition) -> bool {
    let male = composition.count_gender(Gender::Male);
    let female = composition.count_gender(Gender::Female);
    (male == 1 && female > 1) || (female == 1 && male > 1)
}

pub fn flag(members: &[Member]) -> bool {
    is_flagged(&Composition::of(members))
}

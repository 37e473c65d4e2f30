use std::collections::HashMap;

use crate::domain::model::{Assignment, Pair};
use crate::utils::error::{DrawError, Result};

/// Pairs every name in `original` with the name that follows it, cyclically,
/// in `shuffled`.
///
/// Because the offset is 1 inside a cycle, nobody draws themselves once there
/// are at least two names. Pairs come back in `original` order. `shuffled` is
/// expected to be a permutation of `original`; only the lengths are checked
/// up front, and a giver missing from `shuffled` fails the whole call.
pub fn assign_pairs<S: AsRef<str>>(original: &[S], shuffled: &[S]) -> Result<Assignment> {
    if original.len() != shuffled.len() {
        return Err(DrawError::LengthMismatch {
            original: original.len(),
            shuffled: shuffled.len(),
        });
    }

    let mut positions: HashMap<&str, usize> = HashMap::with_capacity(shuffled.len());
    for (index, name) in shuffled.iter().enumerate() {
        positions.entry(name.as_ref()).or_insert(index);
    }

    let pairs = original
        .iter()
        .map(|giver| {
            let giver = giver.as_ref();
            let position =
                positions
                    .get(giver)
                    .copied()
                    .ok_or_else(|| DrawError::UnknownParticipant {
                        name: giver.to_string(),
                    })?;
            let recipient = shuffled[(position + 1) % shuffled.len()].as_ref();
            Ok(Pair::new(giver, recipient))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Assignment::new(pairs))
}

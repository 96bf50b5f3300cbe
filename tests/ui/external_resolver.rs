use std::collections::HashMap;

use bit_element::{BitElementIter, BitSet, ElementResolver, Error};

// Sessions keyed by slot; a slot's bit is set while the session is live.
struct Sessions {
    by_slot: HashMap<usize, String>,
}

#[derive(Debug, PartialEq)]
struct MissingSession(usize);

impl<'a> ElementResolver<&'a mut BitSet> for Sessions {
    type Element = String;
    type Error = MissingSession;

    fn element_at(&mut self, position: usize) -> Result<String, MissingSession> {
        self.by_slot
            .get(&position)
            .cloned()
            .ok_or(MissingSession(position))
    }

    fn remove_element_at(
        &mut self,
        bits: &mut &'a mut BitSet,
        position: usize,
    ) -> Result<(), MissingSession> {
        self.by_slot.remove(&position).ok_or(MissingSession(position))?;
        bits.unset(position);
        Ok(())
    }
}

fn main() {
    let mut live: BitSet = [0, 4, 9].into_iter().collect();
    let mut sessions = Sessions {
        by_slot: [(0, "alice"), (4, "bob"), (9, "carol")]
            .into_iter()
            .map(|(slot, name)| (slot, name.to_string()))
            .collect(),
    };

    let mut iter = BitElementIter::new(&mut live, &mut sessions);
    assert_eq!(iter.remove(), Err(Error::RemoveBeforeNext));
    while iter.has_next() {
        let name = iter.next_element().unwrap();
        if name == "bob" {
            iter.remove().unwrap();
        }
    }
    drop(iter);

    assert!(!live.is_set(4));
    assert_eq!(sessions.by_slot.len(), 2);

    live.set(5);
    let mut iter = live.elements_mut(&mut sessions);
    assert_eq!(iter.next_element(), Ok("alice".to_string()));
    assert_eq!(iter.next_element(), Err(Error::Resolver(MissingSession(5))));
    assert_eq!(iter.next_element(), Ok("carol".to_string()));
    assert_eq!(iter.next_element(), Err(Error::Exhausted));
}

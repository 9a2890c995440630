//! Itinerary State Controller
//!
//! Pure list transitions. Every operation returns a fresh list so
//! reactive consumers see a new value; unknown ids leave the list as is.

use crate::models::{ItemId, ItineraryItem};

fn position(items: &[ItineraryItem], id: &ItemId) -> Option<usize> {
    items.iter().position(|item| &item.id == id)
}

/// Current state of the item with `id`, if still listed
pub fn find(items: &[ItineraryItem], id: &ItemId) -> Option<ItineraryItem> {
    items.iter().find(|item| &item.id == id).cloned()
}

/// Reassign every `number` to index + 1
pub fn renumber(items: Vec<ItineraryItem>) -> Vec<ItineraryItem> {
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| ItineraryItem { number: i as u32 + 1, ..item })
        .collect()
}

/// Move `source` into the slot currently held by `target`,
/// shifting the items in between by one.
pub fn reorder(items: &[ItineraryItem], source: &ItemId, target: &ItemId) -> Vec<ItineraryItem> {
    if source == target {
        return items.to_vec();
    }
    let (Some(from), Some(to)) = (position(items, source), position(items, target)) else {
        tracing::trace!(%source, %target, "reorder ignored: unknown id");
        return items.to_vec();
    };

    let mut next = items.to_vec();
    let moved = next.remove(from);
    next.insert(to, moved);
    tracing::debug!(%source, %target, from, to, "reordered");
    renumber(next)
}

/// Move an item one or more slots up (negative) or down (positive).
/// Clamped at the list edges.
pub fn move_by(items: &[ItineraryItem], id: &ItemId, delta: isize) -> Vec<ItineraryItem> {
    let Some(from) = position(items, id) else {
        return items.to_vec();
    };
    let last = items.len().saturating_sub(1) as isize;
    let to = (from as isize + delta).clamp(0, last) as usize;
    reorder(items, id, &items[to].id)
}

/// Replace the description of the matching item
pub fn edit_description(items: &[ItineraryItem], id: &ItemId, text: &str) -> Vec<ItineraryItem> {
    if position(items, id).is_none() {
        tracing::trace!(%id, "edit ignored: unknown id");
        return items.to_vec();
    }
    tracing::debug!(%id, len = text.len(), "description edited");
    items
        .iter()
        .map(|item| {
            if &item.id == id {
                ItineraryItem { description: text.to_string(), ..item.clone() }
            } else {
                item.clone()
            }
        })
        .collect()
}

/// Remove the matching item and close the numbering gap
pub fn delete(items: &[ItineraryItem], id: &ItemId) -> Vec<ItineraryItem> {
    let Some(index) = position(items, id) else {
        tracing::trace!(%id, "delete ignored: unknown id");
        return items.to_vec();
    };
    let mut next = items.to_vec();
    next.remove(index);
    tracing::debug!(%id, remaining = next.len(), "deleted");
    renumber(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::seed_itinerary;

    fn titles(items: &[ItineraryItem]) -> Vec<&str> {
        items.iter().map(|i| i.title.as_str()).collect()
    }

    fn assert_contiguous(items: &[ItineraryItem]) {
        for (i, item) in items.iter().enumerate() {
            assert_eq!(item.number as usize, i + 1, "item {} misnumbered", item.id);
        }
    }

    #[test]
    fn test_reorder_to_front() {
        let items = reorder(&seed_itinerary(), &"3".into(), &"1".into());
        assert_eq!(titles(&items), vec!["Qutub Minar", "India Gate", "Red Fort", "Lotus Temple"]);
        assert_contiguous(&items);
    }

    #[test]
    fn test_reorder_downwards_shifts_intervening() {
        let items = reorder(&seed_itinerary(), &"1".into(), &"3".into());
        assert_eq!(titles(&items), vec!["Red Fort", "Qutub Minar", "India Gate", "Lotus Temple"]);
        assert_contiguous(&items);
    }

    #[test]
    fn test_reorder_upwards_into_middle() {
        let items = reorder(&seed_itinerary(), &"4".into(), &"2".into());
        assert_eq!(titles(&items), vec!["India Gate", "Lotus Temple", "Red Fort", "Qutub Minar"]);
        assert_contiguous(&items);
    }

    #[test]
    fn test_reorder_every_pair() {
        let seed = seed_itinerary();
        for a in 0..seed.len() {
            for b in 0..seed.len() {
                let items = reorder(&seed, &seed[a].id, &seed[b].id);
                assert_eq!(items.len(), seed.len());
                assert_eq!(items[b].id, seed[a].id);
                assert_contiguous(&items);

                let mut expected = seed.clone();
                let moved = expected.remove(a);
                expected.insert(b, moved);
                let expected_ids: Vec<_> = expected.iter().map(|i| i.id.clone()).collect();
                let ids: Vec<_> = items.iter().map(|i| i.id.clone()).collect();
                assert_eq!(ids, expected_ids);
            }
        }
    }

    #[test]
    fn test_reorder_noops() {
        let seed = seed_itinerary();
        assert_eq!(reorder(&seed, &"2".into(), &"2".into()), seed);
        assert_eq!(reorder(&seed, &"9".into(), &"1".into()), seed);
        assert_eq!(reorder(&seed, &"1".into(), &"9".into()), seed);
    }

    #[test]
    fn test_move_by_clamps() {
        let seed = seed_itinerary();
        let up = move_by(&seed, &"2".into(), -1);
        assert_eq!(titles(&up), vec!["Red Fort", "India Gate", "Qutub Minar", "Lotus Temple"]);
        assert_eq!(move_by(&seed, &"1".into(), -1), seed);
        assert_eq!(move_by(&seed, &"4".into(), 1), seed);
        assert_eq!(move_by(&seed, &"missing".into(), 1), seed);
        assert_eq!(move_by(&[], &"1".into(), 1), Vec::new());
    }

    #[test]
    fn test_edit_description_only_touches_target() {
        let seed = seed_itinerary();
        let items = edit_description(&seed, &"4".into(), "New text");
        assert_eq!(items[3].description, "New text");
        for (before, after) in seed.iter().zip(&items).take(3) {
            assert_eq!(before, after);
        }
        assert_eq!(ItineraryItem { description: seed[3].description.clone(), ..items[3].clone() }, seed[3]);

        // Idempotent
        assert_eq!(edit_description(&items, &"4".into(), "New text"), items);
    }

    #[test]
    fn test_edit_description_unknown_and_empty() {
        let seed = seed_itinerary();
        assert_eq!(edit_description(&seed, &"7".into(), "x"), seed);
        assert_eq!(edit_description(&seed, &"1".into(), "")[0].description, "");
    }

    #[test]
    fn test_delete_renumbers() {
        let items = delete(&seed_itinerary(), &"2".into());
        assert_eq!(titles(&items), vec!["India Gate", "Qutub Minar", "Lotus Temple"]);
        assert_contiguous(&items);
    }

    #[test]
    fn test_delete_unknown_and_last() {
        let seed = seed_itinerary();
        assert_eq!(delete(&seed, &"5".into()), seed);

        let mut items = seed;
        for id in ["1", "2", "3", "4"] {
            let before = items.len();
            items = delete(&items, &id.into());
            assert_eq!(items.len(), before - 1);
            assert_contiguous(&items);
        }
        assert!(items.is_empty());
        assert!(delete(&items, &"1".into()).is_empty());
    }

    #[test]
    fn test_find_follows_item_across_mutations() {
        let seed = seed_itinerary();
        let lotus: ItemId = "4".into();
        assert_eq!(find(&seed, &lotus).map(|i| i.number), Some(4));

        let items = delete(&seed, &"1".into());
        let found = find(&items, &lotus).unwrap();
        assert_eq!((found.id.as_str(), found.number), ("4", 3));

        let items = reorder(&items, &lotus, &"2".into());
        assert_eq!(find(&items, &lotus).map(|i| i.number), Some(1));
        assert!(find(&items, &"1".into()).is_none());
    }

    #[test]
    fn test_draft_survives_renumbering_and_commits_to_moved_item() {
        use crate::edit_state::EditState;

        let lotus: ItemId = "4".into();
        let seed = seed_itinerary();
        let mut edit = EditState::Idle.begin(&find(&seed, &lotus).unwrap().description);
        edit.set_draft("Evening visit".to_string());

        // Another stop is deleted and this one is dragged up while editing
        let items = delete(&seed, &"1".into());
        let items = move_by(&items, &lotus, -1);
        assert_eq!(find(&items, &lotus).map(|i| i.number), Some(2));
        assert_eq!(edit.draft(), Some("Evening visit"));

        let (edit, committed) = edit.commit();
        assert_eq!(edit, EditState::Idle);
        let items = edit_description(&items, &lotus, &committed.unwrap());
        assert_eq!(titles(&items), vec!["Red Fort", "Lotus Temple", "Qutub Minar"]);
        assert_eq!(items[1].description, "Evening visit");
    }

    #[test]
    fn test_ids_stable_after_delete() {
        let items = delete(&seed_itinerary(), &"1".into());
        let ids: Vec<_> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3", "4"]);
    }
}

#![no_main]

use libfuzzer_sys::fuzz_target;
use lrukit::ds::SlotList;

// Fuzz arbitrary operation sequences on SlotList
//
// Tests push_front (with tail recycling), move_to_front, pop_back, get and
// clear, including stale handles kept across recycles.
fuzz_target!(|data: &[u8]| {
    let Some((&cap, ops)) = data.split_first() else {
        return;
    };
    let capacity = usize::from(cap % 16);

    let mut list: SlotList<u32> = SlotList::with_capacity(capacity);
    let mut handles = Vec::new();

    for pair in ops.chunks_exact(2) {
        let op = pair[0] % 5;
        let value = u32::from(pair[1]);

        match op {
            0 => {
                let was_full = list.is_full();
                let old_len = list.len();
                let (handle, displaced) = list.push_front(value);
                assert_eq!(displaced.is_some(), was_full);
                assert_eq!(list.get(handle), Some(&value));
                assert_eq!(list.len(), if was_full { old_len } else { old_len + 1 });
                handles.push(handle);
            },
            1 => {
                if !handles.is_empty() {
                    let handle = handles[value as usize % handles.len()];
                    let live = list.contains(handle);
                    assert_eq!(list.move_to_front(handle), live);
                    if live {
                        assert_eq!(list.front_handle(), Some(handle));
                    }
                }
            },
            2 => {
                let old_len = list.len();
                let back = list.back().copied();
                assert_eq!(list.pop_back(), back);
                assert_eq!(list.len(), old_len.saturating_sub(1));
            },
            3 => {
                if !handles.is_empty() {
                    let handle = handles[value as usize % handles.len()];
                    assert_eq!(list.get(handle).is_some(), list.contains(handle));
                }
            },
            4 => {
                list.clear();
                assert!(list.is_empty());
                for &handle in &handles {
                    assert!(!list.contains(handle));
                }
                handles.clear();
            },
            _ => unreachable!(),
        }

        assert!(list.len() <= capacity.max(1));
        assert_eq!(list.iter().count(), list.len());
    }
});

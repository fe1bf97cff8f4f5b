use proptest::prelude::*;

use vitals::system::process::{
    ProcessRecord, ProcessState, SortOrder, reconcile_selection, sort_records,
};

fn record(pid: u32) -> ProcessRecord {
    ProcessRecord {
        pid,
        name: format!("proc-{pid}"),
        state: ProcessState::Running,
        cpu_percent: 0.0,
        memory_percent: 0.0,
        owner: None,
    }
}

proptest! {
    /// A selection survives a new listing exactly when its pid is present.
    #[test]
    fn selection_survives_iff_pid_listed(
        selected in proptest::option::of(1u32..500),
        pids in proptest::collection::vec(1u32..500, 0..50),
    ) {
        let records: Vec<ProcessRecord> = pids.iter().copied().map(record).collect();
        let outcome = reconcile_selection(selected, &records);

        match selected {
            Some(pid) if pids.contains(&pid) => prop_assert_eq!(outcome, Some(pid)),
            _ => prop_assert_eq!(outcome, None),
        }
    }

    /// Sorting never loses or invents records, under any order.
    #[test]
    fn sorting_is_a_permutation(
        pids in proptest::collection::vec(1u32..10_000, 0..100),
    ) {
        for order in [SortOrder::Cpu, SortOrder::Memory, SortOrder::Name, SortOrder::Pid] {
            let mut records: Vec<ProcessRecord> = pids.iter().copied().map(record).collect();
            sort_records(&mut records, order);
            prop_assert_eq!(records.len(), pids.len());

            let mut sorted_pids: Vec<u32> = records.iter().map(|r| r.pid).collect();
            let mut expected = pids.clone();
            sorted_pids.sort_unstable();
            expected.sort_unstable();
            prop_assert_eq!(sorted_pids, expected);
        }
    }

    /// An empty selection stays empty no matter the listing.
    #[test]
    fn empty_selection_stays_empty(
        pids in proptest::collection::vec(1u32..500, 0..50),
    ) {
        let records: Vec<ProcessRecord> = pids.iter().copied().map(record).collect();
        prop_assert_eq!(reconcile_selection(None, &records), None);
    }
}

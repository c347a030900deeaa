// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::create_test_request;
use crate::{Persistence, PersistenceError};

#[test]
fn test_persistence_initialization() {
    let result: Result<Persistence, PersistenceError> = Persistence::new_in_memory();
    assert!(result.is_ok());
}

#[test]
fn test_foreign_keys_enforced() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    assert!(persistence.verify_foreign_key_enforcement().is_ok());
}

#[test]
fn test_multiple_in_memory_instances_are_isolated() {
    let mut db1: Persistence = Persistence::new_in_memory().unwrap();
    let mut db2: Persistence = Persistence::new_in_memory().unwrap();

    db1.insert_booking(&create_test_request("umrah-2026", &["Youssef"]))
        .unwrap();

    assert_eq!(db1.count_bookings().unwrap(), 1, "db1 should have 1 booking");
    assert_eq!(db2.count_bookings().unwrap(), 0, "db2 should be isolated");
}

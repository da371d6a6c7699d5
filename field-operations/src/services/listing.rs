//! List filtering for the operations pages.

use crate::models::{
    Client, Drone, Field, InventoryItem, ListDronesFilter, ListFieldsFilter, ListInventoryFilter,
    ListTasksFilter, Task,
};
use domain_core::query::{filter, Predicate, TextMatch};

fn search_term(search: &Option<String>) -> &str {
    search.as_deref().unwrap_or("")
}

pub fn filter_fields<'a>(
    fields: &'a [Field],
    criteria: &ListFieldsFilter,
    policy: TextMatch,
) -> Vec<&'a Field> {
    let crop = criteria.crop_type.clone();
    let predicates: Vec<Predicate<'_, Field>> = vec![
        Predicate::search(search_term(&criteria.search), policy),
        Predicate::equals(|f: &Field| f.crop_type.clone(), crop),
    ];
    filter(fields, &predicates)
}

pub fn filter_drones<'a>(
    drones: &'a [Drone],
    criteria: &ListDronesFilter,
    policy: TextMatch,
) -> Vec<&'a Drone> {
    let predicates: Vec<Predicate<'_, Drone>> = vec![
        Predicate::search(search_term(&criteria.search), policy),
        Predicate::equals(|d: &Drone| d.status, criteria.status),
    ];
    filter(drones, &predicates)
}

pub fn filter_tasks<'a>(
    tasks: &'a [Task],
    criteria: &ListTasksFilter,
    policy: TextMatch,
) -> Vec<&'a Task> {
    let predicates: Vec<Predicate<'_, Task>> = vec![
        Predicate::search(search_term(&criteria.search), policy),
        Predicate::equals(|t: &Task| t.status, criteria.status),
        Predicate::equals(|t: &Task| t.field_id, criteria.field_id),
        Predicate::equals(|t: &Task| t.drone_id, criteria.drone_id),
    ];
    filter(tasks, &predicates)
}

/// Inventory by text and category. Category matching ignores case.
pub fn filter_inventory<'a>(
    items: &'a [InventoryItem],
    criteria: &ListInventoryFilter,
    policy: TextMatch,
) -> Vec<&'a InventoryItem> {
    let category = criteria.category.as_ref().map(|c| c.to_lowercase());
    let predicates: Vec<Predicate<'_, InventoryItem>> = vec![
        Predicate::search(search_term(&criteria.search), policy),
        Predicate::equals(|i: &InventoryItem| i.category.to_lowercase(), category),
    ];
    filter(items, &predicates)
}

/// Clients by name, email, phone or address.
pub fn filter_clients<'a>(clients: &'a [Client], search: &str, policy: TextMatch) -> Vec<&'a Client> {
    filter(clients, &[Predicate::search(search, policy)])
}

use hrnet_core::db::open_db_in_memory;
use hrnet_core::{
    build_table_page, Employee, EmployeeField, EmployeeService, NewEmployee, PageItem,
    ServiceError, SortDirection, SortError, SqliteEmployeeRepository, TableState,
};

fn form(first: &str, last: &str, department: &str) -> NewEmployee {
    NewEmployee {
        first_name: first.to_string(),
        last_name: last.to_string(),
        date_of_birth: "1991-03-14".to_string(),
        street: "77 Harbor Drive".to_string(),
        city: "Miami".to_string(),
        state: "Florida".to_string(),
        zipcode: "33101".to_string(),
        start_date: "2019-09-02".to_string(),
        department: department.to_string(),
    }
}

fn roster(count: usize) -> Vec<Employee> {
    (0..count)
        .map(|index| {
            let department = if index % 2 == 0 { "Sales" } else { "Legal" };
            Employee::new(form(&format!("Name{index:02}"), "Smith", department))
        })
        .collect()
}

fn first_names(records: &[Employee]) -> Vec<&str> {
    records
        .iter()
        .map(|employee| employee.fields.first_name.as_str())
        .collect()
}

#[test]
fn create_then_browse_round_trip() {
    let mut conn = open_db_in_memory().unwrap();
    let mut service = EmployeeService::new(SqliteEmployeeRepository::new(&mut conn));

    service.create_employee(form("Zoe", "Quinn", "Sales")).unwrap();
    service.create_employee(form("Adam", "Brook", "Legal")).unwrap();

    assert_eq!(first_names(&service.list_employees().unwrap()), ["Zoe", "Adam"]);

    let page = service.browse(&TableState::default()).unwrap();
    assert_eq!(first_names(&page.rows), ["Adam", "Zoe"]);
    assert_eq!(page.total_matches, 2);
    assert_eq!(page.page_count, 1);
    assert_eq!(page.page_window, vec![PageItem::Page(1)]);
}

#[test]
fn invalid_form_is_rejected_and_not_stored() {
    let mut conn = open_db_in_memory().unwrap();
    let mut service = EmployeeService::new(SqliteEmployeeRepository::new(&mut conn));

    let mut bad = form("Zoe", "Quinn", "Sales");
    bad.zipcode = "abc".to_string();
    match service.create_employee(bad).unwrap_err() {
        ServiceError::Validation(errors) => {
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].field, EmployeeField::Zipcode);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(service.list_employees().unwrap().is_empty());
}

#[test]
fn stored_fields_are_trimmed() {
    let mut conn = open_db_in_memory().unwrap();
    let mut service = EmployeeService::new(SqliteEmployeeRepository::new(&mut conn));

    let mut padded = form("  Zoe ", "Quinn", "Sales ");
    padded.zipcode = " 73301 ".to_string();
    padded.state = " Texas".to_string();
    padded.start_date = "2019-09-02\n".to_string();

    let stored = service.create_employee(padded).unwrap();
    assert_eq!(stored.fields.first_name, "Zoe");
    assert_eq!(stored.fields.zipcode, "73301");
    assert_eq!(stored.fields.state, "Texas");
    assert_eq!(stored.fields.department, "Sales");
    assert_eq!(stored.fields.start_date, "2019-09-02");
    assert_eq!(service.list_employees().unwrap(), vec![stored]);
}

#[test]
fn browse_on_empty_store_is_an_empty_page() {
    let mut conn = open_db_in_memory().unwrap();
    let service = EmployeeService::new(SqliteEmployeeRepository::new(&mut conn));

    let page = service.browse(&TableState::default()).unwrap();
    assert!(page.is_empty());
    assert!(page.rows.is_empty());
    assert_eq!(page.page_count, 0);
    assert!(page.page_window.is_empty());
}

#[test]
fn pipeline_filters_sorts_and_paginates() {
    let records = roster(24);
    let mut state = TableState::default();
    state.set_query("legal");
    state.set_sort_field(EmployeeField::FirstName);
    state.set_page_size(5);
    state.set_page(2);

    let page = build_table_page(&records, &state);
    assert_eq!(page.total_matches, 12);
    assert_eq!(page.page_count, 3);
    // Descending after toggling the default first-name sort.
    assert_eq!(
        first_names(&page.rows),
        ["Name13", "Name11", "Name09", "Name07", "Name05"]
    );
    assert_eq!(
        page.page_window,
        vec![PageItem::Page(1), PageItem::Page(2), PageItem::Page(3)]
    );
}

#[test]
fn no_match_query_yields_empty_result() {
    let records = roster(6);
    let mut state = TableState::default();
    state.set_query("engineering");

    let page = build_table_page(&records, &state);
    assert!(page.is_empty());
    assert_eq!(page.page_count, 0);
}

#[test]
fn state_changes_reset_to_first_page() {
    let mut state = TableState::default();
    state.set_page(4);
    state.set_query("smith");
    assert_eq!(state.page(), 1);

    state.set_page(3);
    state.set_page_size(25);
    assert_eq!(state.page(), 1);
    assert_eq!(state.page_size(), 25);

    state.set_page(2);
    state.set_sort_field(EmployeeField::City);
    assert_eq!(state.page(), 1);
    assert_eq!(state.sort().field, EmployeeField::City);
    assert_eq!(state.sort().direction, SortDirection::Asc);
}

#[test]
fn unknown_sort_field_name_leaves_state_untouched() {
    let mut state = TableState::default();
    let before = state.clone();
    assert_eq!(
        state.set_sort_field_name("salary").unwrap_err(),
        SortError::UnknownField("salary".to_string())
    );
    assert_eq!(state, before);

    state.set_sort_field_name("lastName").unwrap();
    assert_eq!(state.sort().field, EmployeeField::LastName);
}

#[test]
fn unsupported_page_size_snaps_to_default() {
    let mut state = TableState::default();
    state.set_page_size(7);
    assert_eq!(state.page_size(), 5);
}

#[test]
fn page_past_the_end_is_empty_but_keeps_counts() {
    let records = roster(12);
    let mut state = TableState::default();
    state.set_page(9);

    let page = build_table_page(&records, &state);
    assert!(page.rows.is_empty());
    assert_eq!(page.total_matches, 12);
    assert_eq!(page.page_count, 3);
}

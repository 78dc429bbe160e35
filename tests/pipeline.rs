//! End-to-end pipeline tests: annotate -> filter -> sort -> paginate plus
//! the summary/series calls a dashboard makes against the same snapshot.

use chrono::NaiveDate;
use workforce_analytics::{
    AttendanceRecord, AttendanceStatus, Member, MemberStatus, SortDirection, Task, TaskFilters,
    TaskSortColumn, TaskStatus, ViewState, attendance_daily_series, attendance_stats, task_stats,
    task_view,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn init_tracing() {
    tracing_subscriber::fmt().with_test_writer().try_init().ok();
}

fn members() -> Vec<Member> {
    let mut members: Vec<Member> = (1..=10)
        .map(|id| Member {
            id,
            name: format!("Member {id}"),
            department: Some(if id <= 4 { "Engineering" } else { "Support" }.into()),
            status: MemberStatus::Active,
            photo: None,
        })
        .collect();
    members[0].name = "Ada Lovelace".into();
    members
}

fn tasks() -> Vec<Task> {
    (0..23)
        .map(|i| Task {
            id: 100 + i,
            assignee_id: (i % 10) + 1,
            title: format!("Task {i}"),
            description: (i % 3 == 0).then(|| "quarterly review prep".into()),
            deadline: Some(date(2024, 1, 5 + (i % 20) as u32)),
            status: if i % 4 == 0 { TaskStatus::Completed } else { TaskStatus::Pending },
            score: (i % 4 == 0).then(|| 70.0 + i as f64),
            completed_on: (i % 4 == 0).then(|| date(2024, 1, 5 + (i % 20) as u32)),
            created_at: date(2024, 1, 2),
            updated_at: None,
        })
        .collect()
}

#[test]
fn paging_through_the_full_view_reconstructs_the_sorted_order() -> anyhow::Result<()> {
    init_tracing();
    let members = members();
    let tasks = tasks();
    let today = date(2024, 1, 15);

    let mut state = ViewState { per_page: 10, ..Default::default() };
    state.toggle_sort(TaskSortColumn::Deadline);

    let first = task_view(&tasks, &members, &state, today)?;
    assert_eq!(first.total, 23);
    assert_eq!(first.total_pages, 3);

    let mut seen = Vec::new();
    for page in 1..=first.total_pages {
        state.page = page;
        let p = task_view(&tasks, &members, &state, today)?;
        seen.extend(p.items.iter().map(|r| r.task.id));
    }
    assert_eq!(seen.len(), 23);
    let mut unique = seen.clone();
    unique.sort_unstable();
    unique.dedup();
    assert_eq!(unique.len(), 23, "no duplicated or dropped rows across pages");

    // Page 3 has the tail, page 4 is empty but not an error.
    state.page = 3;
    assert_eq!(task_view(&tasks, &members, &state, today)?.items.len(), 3);
    state.page = 4;
    let past_end = task_view(&tasks, &members, &state, today)?;
    assert!(past_end.items.is_empty());
    assert_eq!(past_end.total_pages, 3);
    Ok(())
}

#[test]
fn derived_status_flows_through_filters_and_stats() {
    let members = members();
    let tasks = tasks();
    let today = date(2024, 1, 15);

    // Pending tasks with deadlines before the 15th are overdue in the view
    // even though storage still says Pending.
    let mut state = ViewState { per_page: 50, ..Default::default() };
    state.set_filters(TaskFilters {
        status: Some(TaskStatus::Overdue),
        ..Default::default()
    });
    let overdue_view = task_view(&tasks, &members, &state, today).unwrap();
    assert!(!overdue_view.items.is_empty());
    assert!(
        overdue_view
            .items
            .iter()
            .all(|r| r.task.status == TaskStatus::Pending
                && r.derived_status == TaskStatus::Overdue)
    );

    let stats = task_stats(&overdue_view.items);
    assert_eq!(stats.overdue, overdue_view.total);
    assert!(stats.completion_rate <= 100);
}

#[test]
fn department_search_and_assignee_filters_combine_with_and() {
    let members = members();
    let tasks = tasks();
    let today = date(2024, 1, 15);

    let mut state = ViewState { per_page: 50, ..Default::default() };
    state.set_filters(TaskFilters {
        department: Some("Engineering".into()),
        search: Some("ada".into()),
        ..Default::default()
    });
    let view = task_view(&tasks, &members, &state, today).unwrap();
    assert!(!view.items.is_empty());
    assert!(view.items.iter().all(|r| r.assignee_name == "Ada Lovelace"));

    // A department with no members matches nothing and raises nothing.
    state.set_filters(TaskFilters {
        department: Some("Legal".into()),
        ..Default::default()
    });
    let empty = task_view(&tasks, &members, &state, today).unwrap();
    assert_eq!(empty.total, 0);
    assert_eq!(empty.total_pages, 1);
}

#[test]
fn dashboard_numbers_agree_between_stats_and_series() {
    let members = members();
    let today = date(2024, 1, 15);
    let mut records: Vec<AttendanceRecord> = (1..=7)
        .map(|id| AttendanceRecord {
            member_id: id,
            date: today,
            check_in: None,
            status: AttendanceStatus::OnTime,
        })
        .collect();
    records.push(AttendanceRecord {
        member_id: 8,
        date: today,
        check_in: None,
        status: AttendanceStatus::Late,
    });

    let stats = attendance_stats(&records, 10);
    assert_eq!(
        (stats.present, stats.late, stats.absent, stats.attendance_rate),
        (7, 1, 2, 80)
    );

    let chart = attendance_daily_series(&records, 7, today, members.len() as u64).unwrap();
    assert_eq!(chart.labels.len(), 7);
    // Today is the last bucket and matches the card numbers.
    assert_eq!(*chart.series[0].data.last().unwrap(), stats.present);
    assert_eq!(*chart.series[1].data.last().unwrap(), stats.late);
    assert_eq!(*chart.series[2].data.last().unwrap(), stats.absent);
    // Days with no records show the whole headcount absent.
    assert_eq!(chart.series[2].data[0], 10);
}

#[test]
fn resorting_by_the_same_column_keeps_equal_rows_in_place() {
    let members = members();
    let tasks = tasks();
    let today = date(2024, 1, 15);

    let mut state = ViewState { per_page: 50, ..Default::default() };
    state.sort = Some((TaskSortColumn::CreatedAt, SortDirection::Ascending));

    // Every task shares created_at, so the sorted order must equal input
    // order, twice over.
    let once = task_view(&tasks, &members, &state, today).unwrap();
    let ids: Vec<u64> = once.items.iter().map(|r| r.task.id).collect();
    assert_eq!(ids, tasks.iter().map(|t| t.id).collect::<Vec<_>>());
}

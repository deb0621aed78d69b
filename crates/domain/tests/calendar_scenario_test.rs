//! 暦・時刻の値オブジェクトを組み合わせたシナリオテスト
//!
//! ログ出力を伴う操作（期間の変更拒否・Null Object の利用）は
//! `koyomi-shared` のテスト用サブスクライバで出力を確認できる。
//!
//! 実行方法:
//! ```bash
//! RUST_LOG=koyomi_domain=debug cargo test -p koyomi-domain --test calendar_scenario_test -- --nocapture
//! ```

use koyomi_domain::{
    DomainError, ErrorKind,
    assert::ensure,
    clock::FixedClock,
    time::{
        CalendarDay, DayOfWeek, Duration, Hour, Month, MonthOfYear, Timestamp, TimestampInterval,
        Year,
    },
    value_object::{Nullable, ValueObject},
};
use koyomi_shared::observability::init_test_tracing;
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};

/// 2024-07-22T09:00:00Z（月曜日）に固定した Clock
#[fixture]
fn clock() -> FixedClock {
    init_test_tracing();
    FixedClock::new(Timestamp::parse("2024-07-22T09:00:00Z").unwrap())
}

#[rstest]
fn test_今日から1週間の営業日を数える(clock: FixedClock) {
    let today = CalendarDay::today_with(&clock);
    let start = today.to_timestamp();
    let end = start.add_weeks(1).unwrap().add_days(-1).unwrap();
    let week = TimestampInterval::new(start, end).unwrap();

    let weekdays: usize = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
    ]
    .into_iter()
    .map(|day_of_week| week.total_days_of_week(day_of_week))
    .sum();

    assert_eq!(weekdays, 5);
    assert_eq!(week.days_between_interval().len(), 7);
}

#[rstest]
fn test_月の期間と予約の重なり(clock: FixedClock) {
    let july = Timestamp::now_with(&clock).month_of_year();
    assert_eq!(july, MonthOfYear::new(Month::July, Year::new(2024)));

    let month = july.timestamp_interval().unwrap();
    let reservation = TimestampInterval::new(
        Timestamp::parse("2024-07-30T00:00:00Z").unwrap(),
        Timestamp::parse("2024-08-03T00:00:00Z").unwrap(),
    )
    .unwrap();

    let overlap = month.overlapping_interval(&reservation).unwrap();

    assert_eq!(overlap.start().calendar_day().to_string(), "2024-07-30");
    assert_eq!(overlap.end().calendar_day().to_string(), "2024-07-31");
    assert_eq!(overlap.duration(), Duration::from_days(1).unwrap());
}

#[rstest]
fn test_拒否された変更は期間を変えない(clock: FixedClock) {
    let now = Timestamp::now_with(&clock);
    let mut interval = TimestampInterval::new(now, now.add_hours(8).unwrap()).unwrap();
    let before = interval;

    let error = interval.modify_end(now).unwrap_err();

    assert_eq!(error.kind(), ErrorKind::InvalidRange);
    assert_eq!(interval, before);
}

#[rstest]
fn test_欠損した値の扱い(#[from(clock)] _clock: FixedClock) {
    let present: Nullable<CalendarDay> = Nullable::new(Some("2024-07-22")).unwrap();
    let absent: Nullable<CalendarDay> = Nullable::new(None::<&str>).unwrap();

    assert_eq!(present.value_of(), Some("2024-07-22".to_string()));
    assert!(absent.is_null_object());
    assert_eq!(absent.value_of(), None);

    let error = absent.get().unwrap_err();
    assert_eq!(error.kind(), ErrorKind::NullObject);
    assert_eq!(error.to_string(), "[NullObjectError]: CalendarDay is NullObject");
}

#[rstest]
fn test_勤務時間の長さ(#[from(clock)] _clock: FixedClock) {
    let start: Hour = "22:00".parse().unwrap();
    let end: Hour = "06:30".parse().unwrap();

    let minutes = start.diff_in_minutes(&end);
    let shift = Duration::from_minutes(i64::from(minutes)).unwrap();

    assert_eq!(shift.hours(), 8);
    assert_eq!(shift.minutes(), 30);
    assert!(end.is_less_than(&start));
}

#[test]
fn test_条件チェックと値オブジェクトの検証() {
    let start = CalendarDay::parse("2024-07-22").unwrap();
    let end = CalendarDay::parse("2024-07-21").unwrap();

    let error = ensure(start.is_before(&end), "開始日は終了日より前である必要があります")
        .unwrap_err();

    assert!(matches!(error, DomainError::Validation(_)));
    assert_eq!(start.clone_with(None).unwrap(), start);
}

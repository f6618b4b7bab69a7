use chrono::{Datelike, Days, Local, Months, NaiveDate};
use yew::prelude::*;

/// How far ahead an appointment can be booked.
pub const BOOKING_HORIZON_DAYS: u64 = 90;

const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Inclusive range of bookable days.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BookingWindow {
    pub today: NaiveDate,
    pub min: Option<NaiveDate>,
    pub max: Option<NaiveDate>,
}

impl BookingWindow {
    pub fn starting(today: NaiveDate) -> Self {
        Self {
            today,
            min: Some(today),
            max: today.checked_add_days(Days::new(BOOKING_HORIZON_DAYS)),
        }
    }

    pub fn from_local_clock() -> Self {
        Self::starting(Local::now().date_naive())
    }

    /// Past days are never bookable, whatever `min` says.
    pub fn is_disabled(&self, date: NaiveDate) -> bool {
        date < self.today
            || self.min.map_or(false, |min| date < min)
            || self.max.map_or(false, |max| date > max)
    }
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn next_month(month: NaiveDate) -> NaiveDate {
    month.checked_add_months(Months::new(1)).unwrap_or(month)
}

pub fn previous_month(month: NaiveDate) -> NaiveDate {
    month.checked_sub_months(Months::new(1)).unwrap_or(month)
}

pub fn month_title(month: NaiveDate) -> String {
    format!("{} {}", MONTH_NAMES[month.month0() as usize], month.year())
}

/// Cells of a Sunday-first month view: blanks before the 1st, then every day.
pub fn month_grid(month: NaiveDate) -> Vec<Option<NaiveDate>> {
    let first = first_of_month(month);
    let leading = first.weekday().num_days_from_sunday() as usize;

    let mut cells = vec![None; leading];
    let mut day = first;
    while day.month() == first.month() {
        cells.push(Some(day));
        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }
    cells
}

#[derive(Properties, PartialEq)]
pub struct CalendarProps {
    pub selected: Option<NaiveDate>,
    pub on_select: Callback<NaiveDate>,
    pub window: BookingWindow,
}

#[function_component(Calendar)]
pub fn calendar(props: &CalendarProps) -> Html {
    let month = use_state(|| first_of_month(props.selected.unwrap_or(props.window.today)));

    let go_previous = {
        let month = month.clone();
        Callback::from(move |_: MouseEvent| month.set(previous_month(*month)))
    };
    let go_next = {
        let month = month.clone();
        Callback::from(move |_: MouseEvent| month.set(next_month(*month)))
    };

    html! {
        <div class="calendar">
            <div class="calendar-header">
                <button type="button" class="calendar-nav" onclick={go_previous}>{"‹"}</button>
                <span class="calendar-title">{ month_title(*month) }</span>
                <button type="button" class="calendar-nav" onclick={go_next}>{"›"}</button>
            </div>
            <div class="calendar-grid">
                { for DAY_NAMES.iter().map(|name| html! { <div class="calendar-day-name">{ *name }</div> }) }
                { for month_grid(*month).into_iter().map(|cell| match cell {
                    None => html! { <div class="calendar-cell empty"></div> },
                    Some(date) => {
                        let disabled = props.window.is_disabled(date);
                        let on_select = props.on_select.clone();
                        let onclick = Callback::from(move |_: MouseEvent| {
                            if !disabled {
                                on_select.emit(date);
                            }
                        });
                        html! {
                            <button
                                type="button"
                                class={classes!(
                                    "calendar-cell",
                                    (props.selected == Some(date)).then(|| "selected"),
                                    (date == props.window.today).then(|| "today"),
                                )}
                                {disabled}
                                {onclick}
                            >
                                { date.day() }
                            </button>
                        }
                    }
                }) }
            </div>
        </div>
    }
}

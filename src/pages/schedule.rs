use yew::prelude::*;

use crate::forms::registration::RegistrationForm;

struct ScheduleRow {
    class: &'static str,
    day: &'static str,
    time: &'static str,
    location: &'static str,
    level: &'static str,
}

const ROWS: [ScheduleRow; 8] = [
    ScheduleRow { class: "Hatha Foundations", day: "Mon & Wed", time: "07:00", location: "City Center", level: "Beginner" },
    ScheduleRow { class: "Vinyasa Flow", day: "Mon & Thu", time: "18:30", location: "City Center", level: "All levels" },
    ScheduleRow { class: "Yin & Restore", day: "Tue", time: "20:00", location: "Lakeside", level: "All levels" },
    ScheduleRow { class: "Power Yoga", day: "Tue & Fri", time: "06:30", location: "Old Town", level: "Advanced" },
    ScheduleRow { class: "Hatha Foundations", day: "Sat", time: "09:00", location: "Lakeside", level: "Beginner" },
    ScheduleRow { class: "Vinyasa Flow", day: "Sat", time: "10:30", location: "Old Town", level: "All levels" },
    ScheduleRow { class: "Yin & Restore", day: "Sun", time: "17:00", location: "City Center", level: "All levels" },
    ScheduleRow { class: "Power Yoga", day: "Sun", time: "08:00", location: "Lakeside", level: "Advanced" },
];

const FILTERS: [&str; 4] = ["all", "City Center", "Lakeside", "Old Town"];

fn visible_rows<'a>(rows: &'a [ScheduleRow], filter: &str) -> Vec<&'a ScheduleRow> {
    rows.iter().filter(|row| filter == "all" || row.location == filter).collect()
}

#[function_component(Schedule)]
pub fn schedule() -> Html {
    let filter = use_state(|| "all".to_string());

    html! {
        <div class="schedule-page">
            <style>
                {r#"
                    .schedule-page {
                        max-width: 900px;
                        margin: 0 auto;
                        padding: 6rem 2rem 4rem;
                    }
                    .filter-btn {
                        border: 1px solid #7A9E7E;
                        background: none;
                        color: #4A6B4E;
                        border-radius: 20px;
                        padding: 0.4rem 1.1rem;
                        margin-right: 0.5rem;
                        cursor: pointer;
                    }
                    .filter-btn.active {
                        background: #7A9E7E;
                        color: #fff;
                    }
                    .schedule-table {
                        width: 100%;
                        margin-top: 1.5rem;
                        border-collapse: collapse;
                    }
                    .schedule-table th, .schedule-table td {
                        text-align: left;
                        padding: 0.75rem 0.5rem;
                        border-bottom: 1px solid #E4E0D5;
                    }
                    .registration-section {
                        margin-top: 4rem;
                    }
                "#}
            </style>

            <h1>{"Weekly schedule"}</h1>
            <div class="schedule-filters">
                {
                    FILTERS.iter().map(|name| {
                        let filter = filter.clone();
                        let filter_set = filter.clone();
                        let value = name.to_string();
                        let onclick = Callback::from(move |_: MouseEvent| filter_set.set(value.clone()));
                        let label = if *name == "all" { "All locations" } else { name };
                        html! {
                            <button
                                class={classes!("filter-btn", (*filter == **name).then(|| "active"))}
                                onclick={onclick}
                            >
                                {label}
                            </button>
                        }
                    }).collect::<Html>()
                }
            </div>
            <table class="schedule-table">
                <thead>
                    <tr>
                        <th>{"Class"}</th>
                        <th>{"Days"}</th>
                        <th>{"Time"}</th>
                        <th>{"Location"}</th>
                        <th>{"Level"}</th>
                    </tr>
                </thead>
                <tbody>
                    {
                        visible_rows(&ROWS, &filter).into_iter().map(|row| html! {
                            <tr class="schedule-row">
                                <td>{row.class}</td>
                                <td>{row.day}</td>
                                <td>{row.time}</td>
                                <td>{row.location}</td>
                                <td>{row.level}</td>
                            </tr>
                        }).collect::<Html>()
                    }
                </tbody>
            </table>

            <section class="registration-section">
                <h2>{"Reserve a spot"}</h2>
                <p>{"Tell us where you practice and we will hold a mat for your first class."}</p>
                <RegistrationForm />
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_filter_keeps_every_row() {
        assert_eq!(visible_rows(&ROWS, "all").len(), ROWS.len());
    }

    #[test]
    fn location_filter_only_keeps_matches() {
        let rows = visible_rows(&ROWS, "Lakeside");
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|row| row.location == "Lakeside"));
    }

    #[test]
    fn unknown_location_filters_everything() {
        assert!(visible_rows(&ROWS, "Nowhere").is_empty());
    }
}

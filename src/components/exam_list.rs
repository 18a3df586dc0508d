use yew::prelude::*;

use super::refresh_indicator::RefreshIndicator;
use super::status::Status;
use crate::config::Config;
use crate::hooks::use_exam_list::use_exam_list;
use crate::models::exam::{ExamListItem, processing_count};

#[derive(Properties, PartialEq)]
pub struct ExamListProps {
    pub user_id: AttrValue,
    #[prop_or(Config::EXAM_LIST_DEFAULT_LIMIT)]
    pub limit: usize,
}

/// Recent exams with their grading status.
#[function_component(ExamList)]
pub fn exam_list(props: &ExamListProps) -> Html {
    let exams = use_exam_list(props.user_id.clone(), props.limit);
    let state = &exams.state;

    let body = match &state.data {
        Some(items) if items.is_empty() => html! {
            <p class="exam-list-empty">{"No exams yet"}</p>
        },
        Some(items) => html! {
            <>
                <table class="exam-table">
                    <thead>
                        <tr>
                            <th>{"Exam"}</th>
                            <th>{"Subject"}</th>
                            <th>{"Status"}</th>
                            <th>{"Submissions"}</th>
                            <th>{"Average"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for items.iter().map(render_row) }
                    </tbody>
                </table>
                {render_processing_banner(items)}
            </>
        },
        None => html! {
            <Status
                loading={state.loading}
                error={state.error.clone()}
                on_retry={exams.refresh.clone()}
            />
        },
    };

    html! {
        <section class="exam-list">
            <div class="section-header">
                <h2>{"Recent Exams"}</h2>
                <RefreshIndicator
                    is_refreshing={state.is_refreshing}
                    last_updated={state.last_updated}
                    error={state.error.clone()}
                    enabled={exams.enabled}
                    on_refresh={exams.refresh.clone()}
                    on_toggle={exams.toggle.clone()}
                />
            </div>
            {body}
        </section>
    }
}

fn render_row(exam: &ExamListItem) -> Html {
    let average = exam
        .average_score
        .map_or_else(|| "-".to_string(), |score| format!("{score:.0}%"));

    html! {
        <tr key={exam.id.clone()}>
            <td>
                <span class="exam-title">{&exam.title}</span>
                <span class="exam-date">{exam.created_at.format("%Y-%m-%d").to_string()}</span>
            </td>
            <td>{format!("{} · {}", exam.subject, exam.grade_level)}</td>
            <td><span class={classes!("exam-status", exam.status.css_class())}>{exam.status.label()}</span></td>
            <td>{exam.submission_count.to_string()}</td>
            <td>{average}</td>
        </tr>
    }
}

fn render_processing_banner(exams: &[ExamListItem]) -> Html {
    let processing = processing_count(exams);
    if processing == 0 {
        return html! {};
    }

    html! {
        <div class="processing-banner">
            <p class="processing-count">{format!("{processing} exam(s) currently processing")}</p>
            <p class="processing-hint">{"Status will update automatically when processing completes"}</p>
        </div>
    }
}

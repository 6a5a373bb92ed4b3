use chrono::NaiveDate;
use maud::{html, Markup};

use crate::domain::format::date_key;
use crate::domain::{OpportunityId, Session, TimeOfDay};
use crate::forms::{OpportunityForm, OPPORTUNITY_TIME_CHOICES};
use crate::templates::components::{card, error_banner};
use crate::templates::desktop_layout;

pub struct OpportunityFormVm<'a> {
    /// `None` when creating.
    pub editing: Option<&'a OpportunityId>,
    pub form: &'a OpportunityForm,
    pub error: Option<&'a str>,
    pub today: NaiveDate,
}

pub fn opportunity_form_page(vm: &OpportunityFormVm) -> Markup {
    let (heading, action) = match vm.editing {
        Some(id) => ("Edit Opportunity", format!("/manager/opportunities/{id}")),
        None => ("Create New Opportunity", "/manager/opportunities".to_string()),
    };
    let form = vm.form;
    // Only new opportunities are held to future dates by the browser.
    let min_date = vm.editing.is_none().then(|| date_key(vm.today));

    desktop_layout(
        heading,
        Session::Manager,
        card(
            heading,
            html! {
                @if let Some(message) = vm.error {
                    (error_banner(message))
                }
                form class="stacked" method="post" action=(action) {
                    label for="oppTitle" { "Opportunity Title" }
                    input type="text" id="oppTitle" name="title" value=(form.title) required;

                    label for="oppDesc" { "Description" }
                    textarea id="oppDesc" name="description" rows="3" { (form.description) }

                    label for="isDateRange" {
                        input type="checkbox" id="isDateRange" name="isDateRange" value="on"
                            checked[form.is_date_range];
                        " Is this a date range?"
                    }

                    label for="oppDate" { "Date (start date for a range)" }
                    input type="date" id="oppDate" name="date" value=(form.date) min=[min_date.as_deref()] required;

                    label for="oppEndDate" { "End Date (date ranges only)" }
                    input type="date" id="oppEndDate" name="endDate" value=(form.end_date);

                    label for="oppTimeOfDay" { "Time of Day (Optional)" }
                    select id="oppTimeOfDay" name="timeOfDay" {
                        @for choice in time_choices(&form.time_of_day) {
                            option value=(choice.label()) selected[choice.label() == form.time_of_day] {
                                (time_choice_label(choice))
                            }
                        }
                    }

                    label for="oppTimeRange" { "Specific Time Range (e.g., 9 AM - 1 PM)" }
                    input type="text" id="oppTimeRange" name="timeRange" value=(form.time_range)
                        placeholder="e.g., 09:00 - 13:00";

                    label for="oppVolunteers" { "Number of Volunteers Needed" }
                    input type="number" id="oppVolunteers" name="volunteersNeeded"
                        value=(form.volunteers_needed) min="1" required;

                    div class="actions" {
                        a class="btn secondary" href="/" { "Cancel" }
                        button class="btn" type="submit" { "Save Opportunity" }
                    }
                }
            },
        ),
    )
}

/// The select's choices, plus the current value when it is not one of them
/// (e.g. "Full Day" on an imported opportunity).
fn time_choices(current: &str) -> Vec<TimeOfDay> {
    let mut choices = OPPORTUNITY_TIME_CHOICES.to_vec();
    if let Some(extra) = TimeOfDay::from_label(current) {
        if !choices.contains(&extra) {
            choices.push(extra);
        }
    }
    choices
}

fn time_choice_label(choice: TimeOfDay) -> &'static str {
    match choice {
        TimeOfDay::Custom => "Custom (Specify Range)",
        other => other.label(),
    }
}

//! Onboarding wizard.
//!
//! Ten steps, forward-only. Answers accumulate in a single
//! [`OnboardingAnswers`] value owned by this component and handed to
//! the signup view by value when the commit hold completes.
//!
//! Timers (the 300 ms auto-advance and the hold-to-commit tick) are
//! kept as cancellable task handles in signals, cancelled on early
//! release or teardown, so an unmounted step cannot advance the wizard.

mod flow;
mod steps;

use std::time::Duration;

use dioxus::prelude::*;
use kindclub_core::OnboardingAnswers;

pub use flow::{HoldProgress, OnboardingStep, StepFlow, AUTO_ADVANCE_MS, HOLD_TICK_MS};

use crate::app::AppView;
use crate::context::use_view;
use kindclub_ui::StepProgress;
use steps::{CommitStep, GoalStep, InfoStep, InterestsStep, MoodCheckStep, NameStep};

/// Onboarding wizard component.
#[component]
pub fn Onboarding() -> Element {
    let mut view = use_view();
    let mut flow = use_signal(StepFlow::new);
    let answers = use_signal(OnboardingAnswers::default);
    let mut pending_advance: Signal<Option<Task>> = use_signal(|| None);
    let hold = use_signal(HoldProgress::new);
    let mut hold_timer: Signal<Option<Task>> = use_signal(|| None);

    // Refresh loses all wizard state; that is accepted. What must not
    // happen is a timer from a dead step firing later.
    use_drop(move || {
        if let Some(task) = pending_advance.take() {
            task.cancel();
        }
        if let Some(task) = hold_timer.take() {
            task.cancel();
        }
    });

    let advance = move |_: ()| {
        flow.write().next();
    };

    // Single-select steps auto-advance after a short fixed delay. A
    // fresh selection replaces the pending timer rather than stacking.
    let mut delayed_advance = move || {
        if let Some(task) = pending_advance.take() {
            task.cancel();
        }
        let task = spawn(async move {
            tokio::time::sleep(Duration::from_millis(AUTO_ADVANCE_MS)).await;
            pending_advance.set(None);
            flow.write().next();
        });
        pending_advance.set(Some(task));
    };

    let on_mood = {
        let mut answers = answers;
        move |choice: String| {
            answers.write().mood = Some(choice);
            delayed_advance();
        }
    };

    let on_goal = {
        let mut answers = answers;
        move |choice: String| {
            answers.write().goal = Some(choice);
            delayed_advance();
        }
    };

    let on_toggle_interest = {
        let mut answers = answers;
        move |interest: String| {
            answers.write().toggle_interest(&interest);
        }
    };

    let on_name_input = {
        let mut answers = answers;
        move |value: String| {
            answers.write().name = value;
        }
    };

    let on_hold_press = {
        let mut hold = hold;
        move |_: ()| {
            if hold.read().fired() {
                return;
            }
            if let Some(task) = hold_timer.take() {
                task.cancel();
            }
            let task = spawn(async move {
                loop {
                    tokio::time::sleep(Duration::from_millis(HOLD_TICK_MS)).await;
                    let completed = hold.write().tick();
                    if completed {
                        tracing::info!("onboarding committed");
                        view.set(AppView::Signup { answers: answers() });
                        break;
                    }
                }
            });
            hold_timer.set(Some(task));
        }
    };

    let on_hold_release = {
        let mut hold = hold;
        move |_: ()| {
            if let Some(task) = hold_timer.take() {
                task.cancel();
            }
            hold.write().release();
        }
    };

    let current = flow().current();
    let answers_now = answers();
    let hold_now = hold();

    rsx! {
        main { class: "onboarding",
            header { class: "onboarding-header",
                StepProgress {
                    current: flow().position(),
                    total: StepFlow::total(),
                }
            }

            match current {
                OnboardingStep::Welcome => rsx! {
                    InfoStep {
                        title: "Welcome to KindClub",
                        body: "A few minutes a day to grow a kinder, steadier you. \
                               Let's set things up together.",
                        cta: "Let's go",
                        on_continue: advance,
                    }
                },
                OnboardingStep::MoodCheck => rsx! {
                    MoodCheckStep {
                        selected: answers_now.mood.clone(),
                        on_select: on_mood,
                    }
                },
                OnboardingStep::Science => rsx! {
                    InfoStep {
                        title: "Kindness changes your brain",
                        body: "Small daily acts of kindness are linked to lower stress \
                               and a stronger sense of connection. We'll keep each one \
                               small enough to actually do.",
                        cta: "Makes sense",
                        on_continue: advance,
                    }
                },
                OnboardingStep::Interests => rsx! {
                    InterestsStep {
                        selected: answers_now.interests.clone(),
                        ready: answers_now.interests_ready(),
                        on_toggle: on_toggle_interest,
                        on_continue: advance,
                    }
                },
                OnboardingStep::Goal => rsx! {
                    GoalStep {
                        selected: answers_now.goal.clone(),
                        on_select: on_goal,
                    }
                },
                OnboardingStep::Preview => rsx! {
                    InfoStep {
                        title: "Your daily rhythm",
                        body: "Every day you'll get one quote to sit with, one small \
                               challenge to try, and one short lesson to explore.",
                        cta: "Sounds good",
                        on_continue: advance,
                    }
                },
                OnboardingStep::Name => rsx! {
                    NameStep {
                        value: answers_now.name.clone(),
                        ready: answers_now.name_ready(),
                        oninput: on_name_input,
                        on_continue: advance,
                    }
                },
                OnboardingStep::Reminder => rsx! {
                    InfoStep {
                        title: "A gentle nudge",
                        body: "You can pick a daily reminder time later in settings. \
                               No pressure, no guilt trips.",
                        cta: "Got it",
                        on_continue: advance,
                    }
                },
                OnboardingStep::Streaks => rsx! {
                    InfoStep {
                        title: "Streaks, kindly",
                        body: "Complete your daily challenge to grow your streak. \
                               Miss a day? It happens. Just pick it back up.",
                        cta: "One more step",
                        on_continue: advance,
                    }
                },
                OnboardingStep::Commit => rsx! {
                    CommitStep {
                        percent: hold_now.percent(),
                        fired: hold_now.fired(),
                        on_press: on_hold_press,
                        on_release: on_hold_release,
                    }
                },
            }
        }
    }
}

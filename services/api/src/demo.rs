use crate::infra::{parse_key_value, parse_rating, DryRunTransport};
use chrono::Utc;
use clap::Args;
use fit_assessment::assessments::archetype::{
    render as render_archetype, AnswerSet, ArchetypeEngine, ArchetypeResult, ArchetypeSession,
    ArchetypeView, ContactField, IntakeDetails, IntakeField, SharedResult,
};
use fit_assessment::assessments::compass::{
    render as render_compass, CompassContactField, CompassResult, CompassSession, CompassView,
};
use fit_assessment::assessments::{
    ArchetypeResultsRequest, AssessmentService, CompassResultsRequest, Notification,
    PendingSubmission,
};
use fit_assessment::config::AppConfig;
use fit_assessment::error::AppError;
use fit_assessment::transport::{
    DeliveryError, DeliveryReceipt, ReqwestWebhookTransport, WebhookPayload, WebhookTransport,
};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

const DEMO_SHARE_BASE: &str = "https://fit.example.com/assessment";

#[derive(Args, Debug, Default)]
pub(crate) struct ArchetypeScoreArgs {
    /// Answer as QUESTION_ID=VALUE, e.g. `timeline=kpis`. Repeatable.
    #[arg(long = "answer", value_parser = parse_key_value)]
    pub(crate) answers: Vec<(String, String)>,
    /// Query string of a shared result link to open instead of --answer.
    #[arg(long)]
    pub(crate) share_query: Option<String>,
    /// Respondent name, used when printing a share link.
    #[arg(long)]
    pub(crate) name: Option<String>,
    /// Print the result as JSON.
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct CompassScoreArgs {
    /// Slider rating as ATTRIBUTE=1..5, e.g. `awake=4`. Unrated sliders stay at 3.
    #[arg(long = "rating", value_parser = parse_rating)]
    pub(crate) ratings: Vec<(String, u8)>,
    /// Print the result as JSON.
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Play the score reveal frame by frame at its real cadence.
    #[arg(long)]
    pub(crate) animate: bool,
    /// Post contact submissions to the configured webhook instead of a dry run.
    #[arg(long)]
    pub(crate) deliver: bool,
    /// Skip the compass portion of the demo.
    #[arg(long)]
    pub(crate) skip_compass: bool,
}

#[derive(Debug, Serialize)]
struct ArchetypeSummary<'a> {
    result: &'a ArchetypeResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    share_link: Option<String>,
}

fn dry_run_service() -> AssessmentService<DryRunTransport> {
    AssessmentService::new(Arc::new(DryRunTransport::default()))
}

pub(crate) fn run_archetype_score(args: ArchetypeScoreArgs) -> Result<(), AppError> {
    let service = dry_run_service();

    if let Some(query) = args.share_query.as_deref() {
        let view = service.open_share_link(query)?;
        print_json(&view);
        return Ok(());
    }

    let engine = ArchetypeEngine::default();
    let responses: AnswerSet = args.answers.into_iter().collect();
    for (question_id, value) in responses.iter() {
        match engine.catalog().question(question_id) {
            None => eprintln!("warning: unknown question '{question_id}' ignored"),
            Some(question) if question.option(value).is_none() => {
                eprintln!("warning: '{value}' is not an option for '{question_id}'")
            }
            Some(_) => {}
        }
    }

    let share_link = match args.name {
        Some(name) => {
            let intake = IntakeDetails {
                name,
                ..IntakeDetails::default()
            };
            let shared = SharedResult::new(intake, responses.clone());
            Some(shared.to_url(DEMO_SHARE_BASE)?.to_string())
        }
        None => None,
    };

    let result = service.archetype_results(ArchetypeResultsRequest { responses });
    if args.json {
        print_json(&ArchetypeSummary {
            result: &result,
            share_link,
        });
        return Ok(());
    }

    print_archetype_result(&result);
    if let Some(link) = share_link {
        println!("Share link: {link}");
    }
    Ok(())
}

pub(crate) fn run_compass_score(args: CompassScoreArgs) -> Result<(), AppError> {
    let service = dry_run_service();
    let result = service.compass_results(CompassResultsRequest {
        responses: args.ratings.into_iter().collect(),
    })?;

    if args.json {
        print_json(&result);
    } else {
        print_compass_result(&result);
    }
    Ok(())
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    if args.deliver {
        let config = AppConfig::load()?;
        println!(
            "Delivering to {} webhook: {}",
            config.webhook.mode.as_str(),
            config.webhook.endpoint()
        );
        let transport = ReqwestWebhookTransport::from_config(&config.webhook)?;
        run_scripted_demo(&transport, &args).await
    } else {
        let transport = DryRunTransport::default();
        run_scripted_demo(&transport, &args).await?;
        println!();
        println!("Dry run captured {} payload(s)", transport.payloads().len());
        Ok(())
    }
}

async fn run_scripted_demo<T: WebhookTransport>(
    transport: &T,
    args: &DemoArgs,
) -> Result<(), AppError> {
    archetype_demo(transport, args.animate).await?;
    if !args.skip_compass {
        println!();
        compass_demo(transport, args.animate).await?;
    }
    Ok(())
}

const SCRIPTED_ANSWERS: [(&str, &str); 10] = [
    ("timeline", "kpis"),
    ("decisionMaking", "data"),
    ("innovation", "fast"),
    ("partnership", "optimization"),
    ("budget", "scale"),
    ("creative", "conversion"),
    ("communication", "quick"),
    ("competitive", "metrics"),
    ("agencyIdeas", "results"),
    ("pastLessons", "performance"),
];

async fn archetype_demo<T: WebhookTransport>(
    transport: &T,
    animate: bool,
) -> Result<(), AppError> {
    println!("Partnership FIT assessment demo");

    let mut session = ArchetypeSession::default();
    session.update_intake(IntakeField::Name, "Casey Morgan");
    session.update_intake(IntakeField::Organization, "Lumen Mobility");
    session.update_intake(IntakeField::Role, "Chief Marketing Officer");
    session.start();

    for (question_id, value) in SCRIPTED_ANSWERS {
        if let ArchetypeView::Question(view) = render_archetype(&session) {
            let label = view
                .options
                .iter()
                .find(|option| option.value == value)
                .map(|option| option.label.as_str())
                .unwrap_or(value);
            println!(
                "  [{:>3}%] Q{}/{} {} -> {}",
                view.progress_pct, view.number, view.total, view.prompt, label
            );
        }
        session.select_answer(question_id, value);
        session.next();
    }

    play_reveal(animate, session.reveal_cadence(), |frame| {
        let advanced = session.tick_reveal();
        if advanced && frame % 15 == 0 {
            if let ArchetypeView::Results(view) = render_archetype(&session) {
                let line: Vec<String> = view
                    .quadrants
                    .iter()
                    .map(|quadrant| format!("{} {:>3}%", quadrant.title, quadrant.displayed_pct))
                    .collect();
                println!("  reveal {frame:>2}: {}", line.join(" | "));
            }
        }
        advanced
    })
    .await;

    if let Some(result) = session.results() {
        print_archetype_result(&result);
    }

    let link = SharedResult::new(session.intake().clone(), session.answers().clone())
        .to_url(DEMO_SHARE_BASE)?;
    println!("Share link: {link}");

    session.toggle_contact_form();
    session.update_contact(ContactField::Email, "casey@lumen.test");
    match session.begin_contact_submission(Utc::now()) {
        Ok(pending) => {
            let ticket = pending.ticket;
            let outcome = deliver(transport, pending).await;
            session.complete_contact_submission(ticket, &outcome);
        }
        Err(notice) => println!("Contact form not submitted: {notice}"),
    }
    print_notification(session.notification());
    Ok(())
}

async fn compass_demo<T: WebhookTransport>(transport: &T, animate: bool) -> Result<(), AppError> {
    println!("Brand compass teaser demo");

    let mut session = CompassSession::default();
    for (attribute, rating) in [("awake", 4), ("aware", 5), ("reflective", 2), ("cogent", 4)] {
        if let Err(err) = session.set_rating(attribute, rating) {
            println!("  rating skipped: {err}");
        }
    }
    if let CompassView::Sliders(view) = render_compass(&session) {
        for slider in &view.sliders {
            println!("  {:<12} {} ({})", slider.name, slider.value, slider.label);
        }
    }

    session.show_results();
    play_reveal(animate, session.reveal_cadence(), |frame| {
        let advanced = session.tick_reveal();
        if advanced && frame % 15 == 0 {
            println!("  reveal {frame:>2}: {}", session.displayed_score());
        }
        advanced
    })
    .await;

    print_compass_result(&session.evaluate());

    session.toggle_contact_form();
    session.update_contact(CompassContactField::Name, "Casey Morgan");
    session.update_contact(CompassContactField::Email, "casey@lumen.test");
    session.update_contact(CompassContactField::Company, "Lumen Mobility");
    match session.begin_contact_submission(Utc::now()) {
        Ok(pending) => {
            let ticket = pending.ticket;
            let outcome = deliver(transport, pending).await;
            session.complete_contact_submission(ticket, &outcome);
        }
        Err(notice) => println!("Contact form not submitted: {notice}"),
    }
    print_notification(session.notification());
    Ok(())
}

/// Drain a reveal one frame at a time. With `animate` the frames are paced by
/// a tokio interval at the reveal cadence.
async fn play_reveal<F>(animate: bool, cadence: Option<Duration>, mut advance: F)
where
    F: FnMut(u32) -> bool,
{
    let mut interval = match (animate, cadence) {
        (true, Some(cadence)) if !cadence.is_zero() => Some(tokio::time::interval(cadence)),
        _ => None,
    };

    let mut frame = 0;
    loop {
        if let Some(interval) = interval.as_mut() {
            interval.tick().await;
        }
        frame += 1;
        if !advance(frame) {
            break;
        }
    }
}

async fn deliver<T: WebhookTransport>(
    transport: &T,
    pending: PendingSubmission,
) -> Result<DeliveryReceipt, DeliveryError> {
    print_payload(&pending.payload);
    transport.deliver(&pending.payload).await
}

fn print_payload(payload: &WebhookPayload) {
    println!("Webhook payload ({}):", payload.assessment_type());
    print_json(payload);
}

fn print_archetype_result(result: &ArchetypeResult) {
    println!("Result: {} [{}]", result.title, result.archetype_key);
    for (archetype, pct) in &result.percentages {
        println!("  {:<12} {:>3}%", archetype.label(), pct);
    }
    println!("  {}", result.description);
}

fn print_compass_result(result: &CompassResult) {
    println!("Compass score: {} ({:?})", result.average, result.band);
    for entry in &result.attribute_scores {
        println!("  {:<12} {:>3}", entry.name, entry.score);
    }
    println!("  {}", result.description);
}

fn print_notification(notification: Option<&Notification>) {
    if let Some(notification) = notification {
        println!("Notification ({:?}): {}", notification.kind, notification.message);
    }
}

fn print_json<V: Serialize + ?Sized>(value: &V) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(err) => println!("unable to render json: {err}"),
    }
}

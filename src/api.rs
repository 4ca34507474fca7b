use actix_web::cookie::Cookie;
use actix_web::{web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::clock::Clock;
use crate::dashboard::{commit_goal, GoalRequest, ProgressDashboard};
use crate::explainer::{augment_with_insight, explain_topic, ExplainRequest};
use crate::flashcards::{build_deck, FlashcardRequest};
use crate::focus::{start_study_timer, Activity, FocusSession, FrameObservation, TimerRequest};
use crate::homepage::HOMEPAGE_HTML;
use crate::navigation::{render, sidebar, Page};
use crate::practice::{generate_practice_set, PracticeRequest};
use crate::scheduler::{efficiency_tips, ScheduleRequest, ScheduleResponse, StudyScheduler};
use crate::session::SessionRegistry;
use crate::textgen::TextGeneration;
use crate::video::{annotate, detect_faces, FaceDetection, VideoFrame};

pub const SESSION_COOKIE: &str = "aceai_session";

/// Shared server state handed to every handler through `web::Data`.
pub struct AppState {
    pub sessions: SessionRegistry,
    pub text_gen: TextGeneration,
    pub face_detection: FaceDetection,
    pub camera_enabled: bool,
    pub clock: Clock,
}

impl AppState {
    pub fn new(text_gen: TextGeneration, face_detection: FaceDetection, camera_enabled: bool) -> Self {
        Self {
            sessions: SessionRegistry::new(),
            text_gen,
            face_detection,
            camera_enabled,
            clock: Clock::System,
        }
    }

    pub fn with_sessions(mut self, sessions: SessionRegistry) -> Self {
        self.sessions = sessions;
        self
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }
}

#[derive(Serialize)]
struct Unavailable {
    error: String,
    fallback: String,
}

#[derive(Serialize)]
struct Health {
    status: String,
    sessions: usize,
    text_generation: bool,
    camera: bool,
}

#[derive(Serialize)]
struct FocusStatus {
    camera_available: bool,
    live: FocusSession,
    manual_score: u8,
}

#[derive(Deserialize)]
pub struct ManualFocusRequest {
    pub activity: Activity,
}

#[derive(Deserialize)]
pub struct RawFrameQuery {
    pub width: usize,
    pub height: usize,
}

// Unknown or missing cookies start a new session
fn session_id(req: &HttpRequest) -> (Uuid, bool) {
    match req
        .cookie(SESSION_COOKIE)
        .and_then(|cookie| Uuid::parse_str(cookie.value()).ok())
    {
        Some(id) => (id, false),
        None => (Uuid::new_v4(), true),
    }
}

fn session_cookie(id: Uuid) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, id.to_string())
        .path("/")
        .http_only(true)
        .finish()
}

fn respond<T: Serialize>(id: Uuid, fresh: bool, body: &T) -> HttpResponse {
    let mut builder = HttpResponse::Ok();
    if fresh {
        builder.cookie(session_cookie(id));
    }
    builder.json(body)
}

fn camera_unavailable() -> HttpResponse {
    HttpResponse::ServiceUnavailable().json(Unavailable {
        error: "Webcam not available".to_string(),
        fallback: "/api/focus/manual".to_string(),
    })
}

async fn serve_homepage() -> HttpResponse {
    HttpResponse::Ok().content_type("text/html; charset=utf-8").body(HOMEPAGE_HTML)
}

async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(Health {
        status: "AceAi is running!".to_string(),
        sessions: state.sessions.len(),
        text_generation: state.text_gen.is_available(),
        camera: state.camera_enabled,
    })
}

async fn list_pages() -> HttpResponse {
    HttpResponse::Ok().json(sidebar())
}

async fn show_page(req: HttpRequest, slug: web::Path<String>, state: web::Data<AppState>) -> HttpResponse {
    let page = match Page::from_slug(&slug) {
        Some(page) => page,
        None => return HttpResponse::NotFound().body(format!("unknown page: {slug}")),
    };

    let (id, fresh) = session_id(&req);
    let today = state.clock.today();
    let view = state
        .sessions
        .with_session(id, |session| render(page, session, state.camera_enabled, today));
    respond(id, fresh, &view)
}

async fn generate_schedule(
    req: HttpRequest,
    body: web::Json<ScheduleRequest>,
    state: web::Data<AppState>,
) -> HttpResponse {
    let (id, fresh) = session_id(&req);
    let plan = StudyScheduler::new().generate(&body, state.clock.today());
    respond(
        id,
        fresh,
        &ScheduleResponse {
            plan,
            tips: efficiency_tips(),
        },
    )
}

async fn explain(req: HttpRequest, body: web::Json<ExplainRequest>, state: web::Data<AppState>) -> HttpResponse {
    let (id, fresh) = session_id(&req);
    let mut explanation = state
        .sessions
        .with_session(id, |session| explain_topic(&mut session.progress, &body));

    // The session lock is released before the optional model call
    if let Some(explanation) = explanation.as_mut() {
        augment_with_insight(explanation, &state.text_gen).await;
    }
    respond(id, fresh, &explanation)
}

async fn practice(req: HttpRequest, body: web::Json<PracticeRequest>, state: web::Data<AppState>) -> HttpResponse {
    let (id, fresh) = session_id(&req);
    let set = state
        .sessions
        .with_session(id, |session| generate_practice_set(&mut session.progress, &body));
    respond(id, fresh, &set)
}

async fn flashcards(req: HttpRequest, body: web::Json<FlashcardRequest>) -> HttpResponse {
    let (id, fresh) = session_id(&req);
    respond(id, fresh, &build_deck(&body))
}

async fn progress(req: HttpRequest, state: web::Data<AppState>) -> HttpResponse {
    let (id, fresh) = session_id(&req);
    let view = state.sessions.with_session(id, |session| {
        ProgressDashboard::new().render(&session.progress, session.weekly_goal)
    });
    respond(id, fresh, &view)
}

async fn set_goal(req: HttpRequest, body: web::Json<GoalRequest>, state: web::Data<AppState>) -> HttpResponse {
    let (id, fresh) = session_id(&req);
    let response = state.sessions.with_session(id, |session| {
        session.weekly_goal = Some(body.goal);
        commit_goal(body.goal)
    });
    respond(id, fresh, &response)
}

async fn focus_status(req: HttpRequest, state: web::Data<AppState>) -> HttpResponse {
    let (id, fresh) = session_id(&req);
    let status = state.sessions.with_session(id, |session| FocusStatus {
        camera_available: state.camera_enabled,
        live: session.focus_reader().snapshot(),
        manual_score: session.manual_focus.score,
    });
    respond(id, fresh, &status)
}

async fn focus_frame(
    req: HttpRequest,
    body: web::Json<FrameObservation>,
    state: web::Data<AppState>,
) -> HttpResponse {
    if !state.camera_enabled {
        return camera_unavailable();
    }
    let (id, fresh) = session_id(&req);
    let session = state
        .sessions
        .with_session(id, |session| session.focus.observe(&body));
    respond(id, fresh, &session)
}

async fn focus_raw_frame(
    req: HttpRequest,
    query: web::Query<RawFrameQuery>,
    body: web::Bytes,
    state: web::Data<AppState>,
) -> HttpResponse {
    let detector = match (&state.face_detection, state.camera_enabled) {
        (FaceDetection::Available(detector), true) => detector.clone(),
        _ => return camera_unavailable(),
    };

    let frame = VideoFrame {
        width: query.width,
        height: query.height,
        data: body.to_vec(),
    };
    // Detection and drawing stay outside the registry lock
    let observation = detect_faces(detector.as_ref(), &frame);
    let (id, fresh) = session_id(&req);
    let session = state
        .sessions
        .with_session(id, |session| session.focus.observe(&observation));
    let annotated = annotate(frame, &observation, &session);

    let mut builder = HttpResponse::Ok();
    if fresh {
        builder.cookie(session_cookie(id));
    }
    builder.content_type("application/octet-stream").body(annotated.data)
}

async fn manual_focus(
    req: HttpRequest,
    body: web::Json<ManualFocusRequest>,
    state: web::Data<AppState>,
) -> HttpResponse {
    let (id, fresh) = session_id(&req);
    let update = state
        .sessions
        .with_session(id, |session| session.manual_focus.record(body.activity));
    respond(id, fresh, &update)
}

async fn study_timer(req: HttpRequest, body: web::Json<TimerRequest>) -> HttpResponse {
    let (id, fresh) = session_id(&req);
    respond(id, fresh, &start_study_timer(&body))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(serve_homepage))
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api")
                .route("/pages", web::get().to(list_pages))
                .route("/page/{slug}", web::get().to(show_page))
                .route("/scheduler", web::post().to(generate_schedule))
                .route("/explain", web::post().to(explain))
                .route("/practice", web::post().to(practice))
                .route("/flashcards", web::post().to(flashcards))
                .route("/progress", web::get().to(progress))
                .route("/progress/goal", web::post().to(set_goal))
                .route("/focus", web::get().to(focus_status))
                .route("/focus/frame", web::post().to(focus_frame))
                .route("/focus/raw", web::post().to(focus_raw_frame))
                .route("/focus/manual", web::post().to(manual_focus))
                .route("/focus/timer", web::post().to(study_timer)),
        );
}

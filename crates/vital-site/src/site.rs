//! The assembled site.
//!
//! [`Site`] owns the pieces that live for the whole application (the demo
//! request modal in the navigation bar, the loading splash, the notification
//! sink) and mounts page-local forms as the user navigates. A page-local form
//! is created when its page is entered and dropped when the page is left, so
//! returning to a page starts from an empty form.

use std::sync::{Arc, Mutex, MutexGuard};

use vital_core::{Settings, VitalError, VitalResult};
use vital_forms::catalog::{ContactMessage, DemoRequest, JobApplication};
use vital_forms::{FormModel, FormSession};
use vital_notify::NotificationSink;
use vital_transport::{HttpTransport, SimulatedTransport, Transport};

use crate::careers::CareersBoard;
use crate::modal::ModalForm;
use crate::routes::{self, NavLink, Page, NAV_LINKS};
use crate::splash::LoadingSplash;

/// The transport behind each form.
#[derive(Clone)]
pub struct SiteTransports {
    pub demo: Arc<dyn Transport>,
    pub contact: Arc<dyn Transport>,
    pub careers: Arc<dyn Transport>,
}

impl std::fmt::Debug for SiteTransports {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SiteTransports")
            .field("demo", &self.demo.name())
            .field("contact", &self.contact.name())
            .field("careers", &self.careers.name())
            .finish()
    }
}

impl SiteTransports {
    /// Builds the production transports: HTTP for the demo and contact
    /// forms, a simulated delay for job applications.
    pub fn from_settings(settings: &Settings) -> VitalResult<Self> {
        let endpoints = &settings.endpoints;
        Ok(Self {
            demo: Arc::new(HttpTransport::new(
                &endpoints.demo_request_url,
                endpoints.timeout(),
            )?),
            contact: Arc::new(HttpTransport::new(&endpoints.contact_url, endpoints.timeout())?),
            careers: Arc::new(SimulatedTransport::new(endpoints.careers_delay())),
        })
    }
}

#[derive(Debug)]
struct Mounted {
    page: Page,
    contact: Option<FormSession<ContactMessage>>,
    careers: Option<CareersBoard>,
}

impl Mounted {
    /// Names the page-local form with a submission in flight, if any.
    fn in_flight_form(&self) -> Option<&'static str> {
        if self.contact.as_ref().is_some_and(FormSession::is_submitting) {
            return Some(ContactMessage::schema().name());
        }
        if self
            .careers
            .as_ref()
            .is_some_and(|board| board.application().session().is_submitting())
        {
            return Some(JobApplication::schema().name());
        }
        None
    }
}

/// The Vital Health site.
pub struct Site {
    transports: SiteTransports,
    sink: Arc<dyn NotificationSink>,
    splash: LoadingSplash,
    demo: ModalForm<DemoRequest>,
    mounted: Mutex<Mounted>,
}

impl std::fmt::Debug for Site {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Site")
            .field("transports", &self.transports)
            .field("splash", &self.splash)
            .field("demo", &self.demo)
            .field("page", &self.current_page())
            .finish_non_exhaustive()
    }
}

impl Site {
    /// Builds the site with production transports.
    pub fn from_settings(settings: &Settings, sink: Arc<dyn NotificationSink>) -> VitalResult<Self> {
        let transports = SiteTransports::from_settings(settings)?;
        Ok(Self::new(settings, transports, sink))
    }

    /// Builds the site on the home page with the given transports.
    pub fn new(
        settings: &Settings,
        transports: SiteTransports,
        sink: Arc<dyn NotificationSink>,
    ) -> Self {
        let demo = ModalForm::new(FormSession::new(
            Arc::clone(&transports.demo),
            Arc::clone(&sink),
        ));
        Self {
            splash: LoadingSplash::new(settings.ui.splash()),
            demo,
            mounted: Mutex::new(Mounted {
                page: Page::Home,
                contact: None,
                careers: None,
            }),
            transports,
            sink,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Mounted> {
        self.mounted.lock().expect("site lock poisoned")
    }

    /// Shows the page for `path`, mounting and unmounting page-local forms.
    ///
    /// Leaving a page whose form is still submitting is refused, the same way
    /// a modal refuses to close mid-submission.
    pub fn navigate(&self, path: &str) -> VitalResult<Page> {
        let page = routes::resolve(path);
        let mut mounted = self.lock();
        if mounted.page == page {
            return Ok(page);
        }
        if let Some(form) = mounted.in_flight_form() {
            tracing::warn!(path, form, "navigation refused while submitting");
            return Err(VitalError::SubmissionInFlight(form.to_string()));
        }

        mounted.contact = page.has_contact_form().then(|| {
            FormSession::new(Arc::clone(&self.transports.contact), Arc::clone(&self.sink))
        });
        mounted.careers = page.has_careers_board().then(|| {
            CareersBoard::new(FormSession::<JobApplication>::new(
                Arc::clone(&self.transports.careers),
                Arc::clone(&self.sink),
            ))
        });
        mounted.page = page;

        tracing::debug!(path, page = ?page, "navigated");
        Ok(page)
    }

    /// Returns the page currently shown.
    pub fn current_page(&self) -> Page {
        self.lock().page
    }

    /// Returns the navigation links with the active one flagged.
    pub fn nav_links(&self) -> Vec<(NavLink, bool)> {
        let current = self.current_page();
        NAV_LINKS
            .iter()
            .map(|link| (*link, current.path() == Some(link.path)))
            .collect()
    }

    /// Returns the demo request modal from the navigation bar.
    pub const fn demo_request(&self) -> &ModalForm<DemoRequest> {
        &self.demo
    }

    /// Returns the contact form, if the contact page is shown.
    pub fn contact_form(&self) -> Option<FormSession<ContactMessage>> {
        self.lock().contact.clone()
    }

    /// Returns the careers board, if the careers page is shown.
    pub fn careers(&self) -> Option<CareersBoard> {
        self.lock().careers.clone()
    }

    /// Returns the loading splash.
    pub const fn splash(&self) -> &LoadingSplash {
        &self.splash
    }
}

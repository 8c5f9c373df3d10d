//! Home page: hero slideshow, services, and a portfolio preview.

use std::time::Duration;

use serde::Serialize;

use super::{HeroRotation, MediaPartition, PageMount, ViewState};
use crate::access::{DataAccess, DEFAULT_LATEST_LIMIT};
use crate::errors::AppError;
use crate::models::{HomeHeroImage, ServiceItem};

/// Photos shown in the home portfolio preview.
pub const HOME_PHOTO_LIMIT: usize = 8;

/// Everything the Home page fetches on mount.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HomeData {
    pub hero_images: Vec<HomeHeroImage>,
    pub services: Vec<ServiceItem>,
    pub portfolio: MediaPartition,
}

/// Home page as rendered: fetched data plus the slideshow position.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HomePage {
    #[serde(flatten)]
    pub data: HomeData,
    pub current_slide: usize,
    /// Whether the slideshow timer is running
    pub rotating: bool,
    pub slide_interval_secs: u64,
}

async fn fetch_home(data: DataAccess) -> HomeData {
    let (hero_images, services, latest) = tokio::join!(
        data.home_hero_images(),
        data.services(),
        data.latest_gallery_items(DEFAULT_LATEST_LIMIT),
    );

    HomeData {
        hero_images,
        services,
        portfolio: MediaPartition::from_items(latest).with_photo_limit(HOME_PHOTO_LIMIT),
    }
}

/// The Home page: hero slideshow, services, and a portfolio preview.
pub struct HomeView {
    page: PageMount<HomeData>,
    rotation: HeroRotation,
}

impl HomeView {
    pub fn mount(data: DataAccess, slide_interval: Duration) -> Self {
        Self {
            page: PageMount::mount("home", fetch_home(data)),
            rotation: HeroRotation::new(slide_interval),
        }
    }

    /// Wait for the fetches, then start the slideshow for the loaded images.
    pub async fn ready(&mut self) -> Result<HomeData, AppError> {
        let data = self.page.wait_ready().await?;
        self.rotation.reset(data.hero_images.len());
        Ok(data)
    }

    pub fn snapshot(&self) -> ViewState<HomePage> {
        match self.page.state() {
            ViewState::Loading => ViewState::Loading,
            ViewState::Ready(data) => ViewState::Ready(HomePage {
                data,
                current_slide: self.rotation.current(),
                rotating: self.rotation.is_running(),
                slide_interval_secs: self.rotation.period().as_secs(),
            }),
        }
    }
}

//! Home tab: weather at the active site and the latest board posts.

use api::{require_token, ApiError};
use dioxus::prelude::*;
use store::WeatherSnapshot;

use crate::icons::FaParachuteBox;
use crate::views::Placeholder;
use crate::{report_error, use_alerts, use_api, use_post_feed, use_session, use_site_selection, Icon};

const MISSING: &str = "-";

/// Display strings for a [`WeatherSnapshot`]. Absent values render as `-`.
#[derive(Clone, Debug, PartialEq)]
pub struct WeatherDisplay {
    pub temperature: String,
    pub summary: String,
    pub wind_direction: String,
    pub wind_speed: String,
    pub cloud_coverage: String,
}

impl WeatherDisplay {
    pub fn from_snapshot(weather: &WeatherSnapshot) -> Self {
        Self {
            temperature: weather
                .temperature
                .map_or_else(|| MISSING.to_string(), |t| format!("{t}°C")),
            summary: weather
                .weather
                .clone()
                .filter(|w| !w.is_empty())
                .unwrap_or_else(|| "날씨 정보 없음".to_string()),
            wind_direction: weather
                .wind_direction
                .as_ref()
                .map_or_else(|| MISSING.to_string(), |d| d.label()),
            wind_speed: weather
                .wind_speed
                .map_or_else(|| MISSING.to_string(), |s| format!("{s} m/s")),
            cloud_coverage: weather
                .cloud_coverage
                .clone()
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| MISSING.to_string()),
        }
    }
}

#[component]
pub fn HomeView() -> Element {
    let api = use_api();
    let session = use_session();
    let selection = use_site_selection();
    let mut feed = use_post_feed();
    let mut alerts = use_alerts();
    let mut weather = use_signal(WeatherSnapshot::default);

    // Only a change of the active site refetches the weather.
    let active_site = use_memo(move || selection().active);

    let posts_api = api.clone();
    let _posts = use_resource(move || {
        let api = posts_api.clone();
        async move {
            let result: Result<_, ApiError> = async {
                let token = require_token(session.peek().token.clone())?;
                api.client()?.list_posts(&token).await
            }
            .await;
            match result {
                Ok(posts) => {
                    tracing::debug!("Fetched {} posts", posts.len());
                    feed.write().posts = posts;
                }
                Err(e) => report_error(&mut alerts, &e, "오류", "게시물을 가져오는 중 오류가 발생했습니다."),
            }
        }
    });

    let _weather = use_resource(move || {
        let api = api.clone();
        async move {
            let Some(site) = active_site() else {
                return;
            };
            weather.set(WeatherSnapshot::default());
            let result: Result<_, ApiError> = async {
                let token = require_token(session.peek().token.clone())?;
                api.client()?.get_weather(&site, &token).await
            }
            .await;
            match result {
                Ok(snapshot) => weather.set(snapshot),
                Err(e) => report_error(&mut alerts, &e, "오류", "날씨 정보를 가져오는 중 오류가 발생했습니다."),
            }
        }
    });

    let display = WeatherDisplay::from_snapshot(&weather());
    let site_title = active_site().unwrap_or_else(|| MISSING.to_string());
    let feed_snapshot = feed();

    rsx! {
        div {
            class: "screen home-screen",
            header {
                class: "home-header",
                Icon { icon: FaParachuteBox, width: 40, height: 40 }
                span { class: "brand-name", "GlideMate" }
            }

            section {
                class: "weather-section",
                h2 { class: "section-title", "활공장: {site_title}" }
                div {
                    class: "card weather-card",
                    p {
                        class: "weather-location",
                        if let Some(site) = active_site() {
                            "{site}"
                        } else {
                            "활공장 정보 없음"
                        }
                    }
                    div {
                        class: "weather-info",
                        span { class: "weather-temperature", "{display.temperature}" }
                        span { class: "weather-summary", "{display.summary}" }
                    }
                    div {
                        class: "weather-stats",
                        div {
                            class: "weather-stat",
                            span { class: "weather-stat-label", "풍향" }
                            span { class: "weather-stat-value", "{display.wind_direction}" }
                        }
                        div {
                            class: "weather-stat",
                            span { class: "weather-stat-label", "풍속" }
                            span { class: "weather-stat-value", "{display.wind_speed}" }
                        }
                        div {
                            class: "weather-stat",
                            span { class: "weather-stat-label", "구름양" }
                            span { class: "weather-stat-value", "{display.cloud_coverage}" }
                        }
                    }
                }
            }

            section {
                class: "board-section",
                h2 { class: "section-title", "게시판" }
                div {
                    class: "card board-card",
                    if feed_snapshot.posts.is_empty() {
                        Placeholder { message: "게시물이 없습니다." }
                    } else {
                        for (index, post) in feed_snapshot.posts.iter().enumerate() {
                            p {
                                key: "{index}",
                                class: "post-line",
                                "{post.list_label()}"
                            }
                        }
                    }
                }
            }
        }
    }
}

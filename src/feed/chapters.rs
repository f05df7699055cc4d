//! Windowed chapter-feed retrieval for one series at a time.

use std::num::NonZeroU32;

use chrono::Datelike;
use chrono::Duration;
use chrono::Utc;
use governor::Quota;
use governor::RateLimiter;
use governor::clock::QuantaClock;
use governor::state::InMemoryState;
use governor::state::direct::NotKeyed;
use log::debug;
use log::info;
use log::warn;
use wreq::header::AUTHORIZATION;

use crate::config::Config;
use crate::feed::auth::AccessToken;
use crate::feed::error::FeedError;
use crate::feed::model::Chapter;
use crate::feed::model::ChapterFeedResponse;

pub struct ChapterFetcher {
    client: wreq::Client,
    pub api_url: String,
    window_days: i64,
    page_limit: u32,
    limiter: RateLimiter<NotKeyed, InMemoryState, QuantaClock>,
}

impl ChapterFetcher {
    pub fn new(config: &Config) -> Self {
        // NOTE: See https://api.mangadex.org/docs/2-limitations/
        // GET /manga/{id}/feed is not listed under #endpoint-specific-rate-limits,
        // so the global default of 5 requests per second applies.
        let limiter = RateLimiter::direct(Quota::per_second(NonZeroU32::new(5).unwrap()));

        Self {
            client: crate::feed::build_client(),
            api_url: config.api_url.clone(),
            window_days: config.window_days,
            page_limit: config.page_limit,
            limiter,
        }
    }

    /// Fetches the chapters published within the trailing window for one
    /// series, newest first (upstream order).
    ///
    /// Upstream failures degrade to an empty list so one bad series does not
    /// abort the run. Only the first page is fetched.
    pub async fn fetch_chapters(&self, token: &AccessToken, series_id: &str) -> Vec<Chapter> {
        match self.try_fetch(token, series_id).await {
            Ok(chapters) => chapters,
            Err(e) => {
                warn!("Failed to fetch chapters for series {series_id}: {e}");
                Vec::new()
            }
        }
    }

    async fn try_fetch(
        &self,
        token: &AccessToken,
        series_id: &str,
    ) -> Result<Vec<Chapter>, FeedError> {
        let since = (Utc::now() - Duration::days(self.window_days))
            .format("%Y-%m-%dT%H:%M:%S")
            .to_string();
        let limit = self.page_limit.to_string();

        let request = self
            .client
            .get(format!("{}/manga/{series_id}/feed", self.api_url))
            .header(AUTHORIZATION, format!("Bearer {}", token.as_str()))
            .query(&[
                ("translatedLanguage[]", "en"),
                ("order[publishAt]", "desc"),
                ("publishAtSince", since.as_str()),
                ("limit", limit.as_str()),
            ]);

        let response = self.send(request).await?;

        let status = response.status().as_u16();
        if status != 200 {
            return Err(FeedError::FeedStatus {
                status,
                series_id: series_id.to_string(),
            });
        }

        let body = response.text().await?;
        let feed: ChapterFeedResponse = serde_json::from_str(&body)?;
        Ok(drop_future_dated(feed.data, series_id))
    }

    async fn send(&self, request: wreq::RequestBuilder) -> Result<wreq::Response, wreq::Error> {
        if self.limiter.check().is_err() {
            info!("MangaDex requests are ratelimited. Waiting...");
        }
        self.limiter.until_ready().await;

        let req = request.build()?;
        debug!("Making request to: {}", req.uri());
        self.client.execute(req).await
    }
}

/// Drops records whose publish year is past the current calendar year;
/// upstream occasionally serves far-future timestamps. A record whose year
/// cannot be read is kept for the formatter's fallback to deal with.
fn drop_future_dated(chapters: Vec<Chapter>, series_id: &str) -> Vec<Chapter> {
    let current_year = Utc::now().year();
    let before = chapters.len();

    let kept: Vec<Chapter> = chapters
        .into_iter()
        .filter(|chapter| chapter.publish_year().is_none_or(|year| year <= current_year))
        .collect();

    if kept.len() < before {
        debug!(
            "Dropped {} future-dated chapters for series {series_id}",
            before - kept.len()
        );
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::model::ChapterAttributes;

    fn chapter_published_at(publish_at: &str) -> Chapter {
        Chapter {
            attributes: ChapterAttributes {
                publish_at: publish_at.to_string(),
                ..ChapterAttributes::default()
            },
            ..Chapter::default()
        }
    }

    #[test]
    fn future_dated_chapters_are_dropped() {
        let chapters = vec![
            chapter_published_at("2099-01-01T00:00:00Z"),
            chapter_published_at("2024-03-05T14:30:00Z"),
        ];

        let kept = drop_future_dated(chapters, "series");
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].attributes.publish_at, "2024-03-05T14:30:00Z");
    }

    #[test]
    fn unreadable_publish_year_is_retained() {
        let kept = drop_future_dated(vec![chapter_published_at("soon(tm)")], "series");
        assert_eq!(kept.len(), 1);
    }
}

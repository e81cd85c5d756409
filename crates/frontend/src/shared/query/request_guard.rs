//! Отбрасывание устаревших ответов
//!
//! Каждая загрузка получает номер поколения. Ответ применяется, только если
//! после него не стартовала более новая загрузка: медленный ответ на раннее
//! нажатие клавиши не перетирает результаты позднего.

use leptos::task::spawn_local;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

#[derive(Debug, Clone, Default)]
pub struct RequestGuard {
    latest: Arc<AtomicU64>,
}

impl RequestGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Новое поколение; все выданные ранее билеты становятся устаревшими
    pub fn begin(&self) -> RequestTicket {
        RequestTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }

    /// Запускает загрузку и применяет результат, если он ещё актуален
    pub fn spawn<T, F, A>(&self, label: &'static str, fut: F, apply: A)
    where
        T: 'static,
        F: Future<Output = T> + 'static,
        A: FnOnce(T) + 'static,
    {
        let ticket = self.begin();
        let guard = self.clone();
        spawn_local(async move {
            let result = fut.await;
            if guard.is_current(ticket) {
                apply(result);
            } else {
                log::debug!("{}: dropped stale response (generation {})", label, ticket.0);
            }
        });
    }
}

/// Результат загрузки: в процессе, ошибка или данные (возможно пустые)
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Error(String),
    Loaded(T),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Loading
    }
}

impl<T> LoadState<T> {
    pub fn from_result(result: Result<T, String>) -> Self {
        match result {
            Ok(data) => LoadState::Loaded(data),
            Err(e) => LoadState::Error(e),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Error(e) => Some(e),
            _ => None,
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(data) => Some(data),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_ticket_is_current() {
        let guard = RequestGuard::new();
        let first = guard.begin();
        assert!(guard.is_current(first));

        let second = guard.begin();
        assert!(!guard.is_current(first));
        assert!(guard.is_current(second));
    }

    #[test]
    fn test_clones_share_generation() {
        let guard = RequestGuard::new();
        let shared = guard.clone();
        let ticket = guard.begin();
        shared.begin();
        assert!(!guard.is_current(ticket));
    }

    #[test]
    fn test_load_state_from_result() {
        let ok: LoadState<Vec<i32>> = LoadState::from_result(Ok(vec![]));
        assert_eq!(ok.data(), Some(&vec![]));
        assert!(!ok.is_loading());

        let err: LoadState<Vec<i32>> = LoadState::from_result(Err("500".into()));
        assert_eq!(err.error(), Some("500"));
        assert!(LoadState::<()>::default().is_loading());
    }
}

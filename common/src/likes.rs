//! 찜(좋아요) 목록

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// 사용자가 찜한 상품 ID 집합
///
/// JSON에서는 정렬된 배열로 표현된다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LikedSet {
    ids: BTreeSet<u64>,
}

impl LikedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: u64) -> bool {
        self.ids.contains(&id)
    }

    /// 토글한 새 집합을 돌려준다 (원본은 그대로)
    pub fn toggle(&self, id: u64) -> Self {
        let mut next = self.clone();
        next.toggle_in_place(id);
        next
    }

    /// 제자리 토글. 토글 후 찜 상태를 돌려준다
    pub fn toggle_in_place(&mut self, id: u64) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    /// 목록에 없는 ID를 정리
    pub fn retain_known<F>(&mut self, mut is_known: F)
    where
        F: FnMut(u64) -> bool,
    {
        self.ids.retain(|id| is_known(*id));
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.ids.iter().copied()
    }
}

impl FromIterator<u64> for LikedSet {
    fn from_iter<I: IntoIterator<Item = u64>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

/// 찜 토글 (순수 함수)
pub fn toggle_like(set: &LikedSet, id: u64) -> LikedSet {
    set.toggle(id)
}

//! 表示領域ごとのリクエスト世代管理
//!
//! 領域ごとに連番のチケットを発行し、最新チケット以外の応答は捨てる。
//! タブ切り替え前に出た古いリクエストが後から表示を上書きするのを防ぐ。

/// 応答を書き込む表示領域
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewRegion {
    Settings,
    Events,
    Items,
    Logs,
    /// 追加・削除後の件数カード
    Cards,
}

impl ViewRegion {
    const ALL: [ViewRegion; 5] = [
        ViewRegion::Settings,
        ViewRegion::Events,
        ViewRegion::Items,
        ViewRegion::Logs,
        ViewRegion::Cards,
    ];

    fn index(self) -> usize {
        match self {
            ViewRegion::Settings => 0,
            ViewRegion::Events => 1,
            ViewRegion::Items => 2,
            ViewRegion::Logs => 3,
            ViewRegion::Cards => 4,
        }
    }
}

/// 発行済みリクエストの識別子
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub region: ViewRegion,
    pub seq: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestSequencer {
    latest: [u64; 5],
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self, region: ViewRegion) -> Ticket {
        let slot = &mut self.latest[region.index()];
        *slot += 1;
        Ticket { region, seq: *slot }
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest[ticket.region.index()] == ticket.seq
    }

    /// 全領域の発行中チケットを無効化する（ログアウト時）
    pub fn invalidate_all(&mut self) {
        for region in ViewRegion::ALL {
            self.issue(region);
        }
    }
}

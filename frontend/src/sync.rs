//! 资源同步状态机
//!
//! 每个资源面板持有一个 [`ResourceState`]。
//! 每次拉取都会领取一个 [`FetchTicket`]，只有比已应用的票号更新的结果才会被写入，
//! 因此乱序完成的旧请求不会覆盖较新的数据。

/// 一次拉取的序号
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FetchTicket(u64);

/// 票号发放器
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchSequence {
    issued: u64,
    applied: u64,
}

impl FetchSequence {
    pub fn issue(&mut self) -> FetchTicket {
        self.issued += 1;
        FetchTicket(self.issued)
    }

    /// 票号比所有已应用的都新时返回 true，并记为已应用
    pub fn accept(&mut self, ticket: FetchTicket) -> bool {
        if ticket.0 > self.applied {
            self.applied = ticket.0;
            true
        } else {
            false
        }
    }

    /// 最新发出的请求还没有结果
    pub fn is_pending(&self) -> bool {
        self.applied < self.issued
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// 一个资源集合的显示状态
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceState<T> {
    pub items: Vec<T>,
    pub phase: LoadPhase,
    /// 最近一次失败的提示；成功后清除
    pub error: Option<String>,
    pub shown: bool,
    seq: FetchSequence,
}

impl<T> Default for ResourceState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            phase: LoadPhase::Idle,
            error: None,
            shown: false,
            seq: FetchSequence::default(),
        }
    }
}

impl<T> ResourceState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_load(&mut self) -> FetchTicket {
        self.phase = LoadPhase::Loading;
        self.seq.issue()
    }

    /// 应用一次拉取的结果，过期的结果返回 false 且不改变任何状态
    ///
    /// 失败时保留上一次成功的数据，只记录错误。
    pub fn finish_load(&mut self, ticket: FetchTicket, result: Result<Vec<T>, String>) -> bool {
        if !self.seq.accept(ticket) {
            return false;
        }

        let failed = match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
                false
            }
            Err(message) => {
                self.error = Some(message);
                true
            }
        };

        self.phase = if self.seq.is_pending() {
            LoadPhase::Loading
        } else if failed {
            LoadPhase::Failed
        } else {
            LoadPhase::Loaded
        };
        true
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    /// 切换显示，返回新的值；隐藏不会清空数据
    pub fn toggle_shown(&mut self) -> bool {
        self.shown = !self.shown;
        self.shown
    }

    pub fn show(&mut self) {
        self.shown = true;
    }
}

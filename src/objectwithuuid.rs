use uuid::Uuid;

/// 每次重新計算都會產生新的 id，讓呼叫端可以丟棄過期的重繪結果。
pub trait ObjectWithUUID {
    fn uuid(&self) -> &Uuid;
}

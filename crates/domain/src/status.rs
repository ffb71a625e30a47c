//! # 返品ポジションのステータス
//!
//! ステータスは整数コードで表現され、表示名はプラットフォームの
//! ステータスディレクトリ（インフラ層）で解決される。

define_entity_id! {
    /// ステータスコード
    ///
    /// 返品ポジションの状態を表す整数コード。0 は「未設定」を意味し、
    /// ステータス変更イベントの遷移先として扱われない。
    pub struct StatusCode;
}

define_validated_string! {
    /// ステータスの表示名（値オブジェクト）
    ///
    /// 差分メッセージ（「ステータスが A から B に変更されました」）の
    /// パラメータとして使用される。
    ///
    /// # 不変条件
    ///
    /// - 空文字列ではない
    /// - 最大 100 文字
    pub struct StatusName {
        label: "ステータス名",
        max_length: 100,
    }
}

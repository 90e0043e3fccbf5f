//! # Todo
//!
//! Todo 項目とその値オブジェクトを定義する。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 不変条件 |
//! |---|------------|---------|
//! | [`Todo`] | Todo 項目 | ID はサービスが採番し、採番後は変更されない |
//! | [`TodoId`] | Todo ID | 1 以上の整数 |
//! | [`TodoContent`] | Todo の内容 | 空文字列ではない（前後の空白は保持する） |
//!
//! ## ライフサイクル
//!
//! ```text
//! 作成（completed = false）→ 部分更新（content / completed）→ 削除
//! ```
//!
//! 論理削除・バージョン管理は行わない。

use std::str::FromStr;

use derive_more::Display;
use serde::Serialize;

use crate::DomainError;

/// Todo ID（値オブジェクト）
///
/// ストアが単調増加カウンタで採番する正の整数。
/// パスパラメータなどの文字列からは [`FromStr`] で検証付きに変換する。
/// シリアライズのみ提供し、外部入力からの生成は必ず検証を通す。
///
/// # 不変条件
///
/// - 1 以上
///
/// # 使用例
///
/// ```rust
/// use todo_api_domain::todo::TodoId;
///
/// let id: TodoId = "42".parse().unwrap();
/// assert_eq!(id.as_u64(), 42);
/// assert!("abc".parse::<TodoId>().is_err());
/// assert!("0".parse::<TodoId>().is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Display,
)]
#[serde(transparent)]
#[display("{_0}")]
pub struct TodoId(u64);

impl TodoId {
    /// 最初に採番される ID（1）
    pub const FIRST: Self = Self(1);

    /// 指定した値から Todo ID を作成する
    ///
    /// # エラー
    ///
    /// 0 の場合は `DomainError::Validation` を返す。
    pub fn new(value: u64) -> Result<Self, DomainError> {
        if value == 0 {
            return Err(DomainError::Validation(
                "ID は 1 以上の整数である必要があります".to_string(),
            ));
        }
        Ok(Self(value))
    }

    /// 内部の u64 値を取得する
    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// 次の ID を返す
    ///
    /// u64 の最大値に達している場合は `None` を返す。
    pub fn next(&self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl FromStr for TodoId {
    type Err = DomainError;

    /// 文字列から Todo ID への変換を試みる
    ///
    /// ASCII 数字のみを受け付ける。符号・小数点・空白を含む値は拒否する。
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::Validation(format!(
                "ID は 1 以上の整数である必要があります: {s:?}"
            )));
        }
        let value = s.parse::<u64>().map_err(|_| {
            DomainError::Validation(format!("ID が大きすぎます: {s:?}"))
        })?;
        Self::new(value)
    }
}

/// Todo の内容（値オブジェクト）
///
/// クライアントが入力した文字列をそのまま保持する。
/// 作成後に取得した内容が入力と一致することを保証するため、トリムは行わない。
/// 生成は [`TodoContent::new`] のみで、空文字列の値は存在しない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Display)]
#[serde(transparent)]
#[display("{_0}")]
pub struct TodoContent(String);

impl TodoContent {
    /// 内容を作成する
    ///
    /// # エラー
    ///
    /// 空文字列の場合は `DomainError::Validation` を返す。
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation("内容は必須です".to_string()));
        }
        Ok(Self(value))
    }

    /// 文字列参照を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Todo エンティティ
///
/// # 不変条件
///
/// - `id` は採番後に変更されない（`with_*` は `id` を引き継ぐ）
/// - 作成直後の `completed` は `false`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    id:        TodoId,
    content:   TodoContent,
    completed: bool,
}

impl Todo {
    /// 新しい Todo を作成する（未完了状態）
    pub fn new(id: TodoId, content: TodoContent) -> Self {
        Self {
            id,
            content,
            completed: false,
        }
    }

    /// 既存の値から Todo を復元する
    ///
    /// 初期データの投入やストアからの読み出しに使用する。
    pub fn from_parts(id: TodoId, content: TodoContent, completed: bool) -> Self {
        Self {
            id,
            content,
            completed,
        }
    }

    // Getters

    pub fn id(&self) -> TodoId {
        self.id
    }

    pub fn content(&self) -> &TodoContent {
        &self.content
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    /// 内容を差し替えた Todo を返す
    pub fn with_content(self, content: TodoContent) -> Self {
        Self { content, ..self }
    }

    /// 完了状態を差し替えた Todo を返す
    pub fn with_completed(self, completed: bool) -> Self {
        Self { completed, ..self }
    }

    /// 部分更新を適用した Todo を返す
    ///
    /// `None` のフィールドは現在の値を保持する。
    pub fn apply(self, patch: TodoPatch) -> Self {
        let todo = match patch.content {
            Some(content) => self.with_content(content),
            None => self,
        };
        match patch.completed {
            Some(completed) => todo.with_completed(completed),
            None => todo,
        }
    }
}

/// Todo の部分更新内容
///
/// 指定されたフィールドのみを更新する。両方 `None` の場合は何も変更しない。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoPatch {
    pub content:   Option<TodoContent>,
    pub completed: Option<bool>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    // TodoId のテスト

    #[rstest]
    #[case("1", 1)]
    #[case("42", 42)]
    #[case("007", 7)]
    fn test_todo_idは数字文字列をパースできる(#[case] input: &str, #[case] expected: u64) {
        let id: TodoId = input.parse().unwrap();
        assert_eq!(id.as_u64(), expected);
    }

    #[rstest]
    #[case("", "空文字列")]
    #[case("abc", "非数値")]
    #[case("0", "ゼロ")]
    #[case("-1", "負数")]
    #[case("+1", "符号付き")]
    #[case("1.5", "小数")]
    #[case(" 1", "空白")]
    #[case("99999999999999999999999", "u64 の範囲外")]
    fn test_todo_idは不正な文字列を拒否する(#[case] input: &str, #[case] _reason: &str) {
        assert!(matches!(
            input.parse::<TodoId>(),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn test_todo_idのnextは1加算した値を返す() {
        assert_eq!(TodoId::FIRST.next(), Some(TodoId::new(2).unwrap()));
        assert_eq!(TodoId::new(u64::MAX).unwrap().next(), None);
    }

    #[test]
    fn test_todo_idは数値としてシリアライズされる() {
        let json = serde_json::to_value(TodoId::new(3).unwrap()).unwrap();
        assert_eq!(json, serde_json::json!(3));
    }

    // TodoContent のテスト

    #[test]
    fn test_内容は文字列としてシリアライズされる() {
        let json = serde_json::to_value(TodoContent::new("Buy milk").unwrap()).unwrap();
        assert_eq!(json, serde_json::json!("Buy milk"));
    }

    #[test]
    fn test_内容は空文字列を拒否する() {
        assert!(TodoContent::new("").is_err());
    }

    #[rstest]
    #[case("Buy milk")]
    #[case("  前後の空白を保持する  ")]
    #[case(" ")]
    fn test_内容は入力をそのまま保持する(#[case] input: &str) {
        let content = TodoContent::new(input).unwrap();
        assert_eq!(content.as_str(), input);
    }

    // Todo のテスト

    #[test]
    fn test_新規作成したtodoは未完了である() {
        let todo = Todo::new(TodoId::FIRST, TodoContent::new("Buy milk").unwrap());

        assert_eq!(todo.id(), TodoId::FIRST);
        assert_eq!(todo.content().as_str(), "Buy milk");
        assert!(!todo.completed());
    }

    #[test]
    fn test_with_completedは内容とidを保持する() {
        let todo = Todo::new(TodoId::FIRST, TodoContent::new("Buy milk").unwrap());

        let updated = todo.clone().with_completed(true);

        assert_eq!(
            updated,
            Todo::from_parts(TodoId::FIRST, todo.content().clone(), true)
        );
    }

    #[test]
    fn test_with_contentは完了状態とidを保持する() {
        let todo = Todo::from_parts(TodoId::FIRST, TodoContent::new("old").unwrap(), true);

        let updated = todo.with_content(TodoContent::new("new").unwrap());

        assert_eq!(updated.id(), TodoId::FIRST);
        assert_eq!(updated.content().as_str(), "new");
        assert!(updated.completed());
    }

    // TodoPatch のテスト

    #[test]
    fn test_completedのみの更新は内容を変更しない() {
        let todo = Todo::new(TodoId::FIRST, TodoContent::new("Buy milk").unwrap());

        let updated = todo.apply(TodoPatch {
            content:   None,
            completed: Some(true),
        });

        assert_eq!(updated.content().as_str(), "Buy milk");
        assert!(updated.completed());
    }

    #[test]
    fn test_空の更新は何も変更しない() {
        let todo = Todo::from_parts(TodoId::FIRST, TodoContent::new("Buy milk").unwrap(), true);

        let updated = todo.clone().apply(TodoPatch::default());

        assert_eq!(updated, todo);
    }

    #[test]
    fn test_両フィールドの更新を適用する() {
        let todo = Todo::new(TodoId::FIRST, TodoContent::new("old").unwrap());

        let updated = todo.apply(TodoPatch {
            content:   Some(TodoContent::new("new").unwrap()),
            completed: Some(true),
        });

        assert_eq!(
            updated,
            Todo::from_parts(TodoId::FIRST, TodoContent::new("new").unwrap(), true)
        );
    }
}

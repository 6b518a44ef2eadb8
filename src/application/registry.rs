use std::collections::BTreeMap;

use uuid::Uuid;

use crate::domain::{CatalogEntry, Customer, ItemStateError, Title};

use super::errors::{CatalogError, RegistryError, Result};

/// 台帳ID - 台帳ごとにランダムに採番される
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegistryId(Uuid);

impl RegistryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RegistryId {
    fn default() -> Self {
        Self::new()
    }
}

/// 台帳内の資料への参照
///
/// `ItemRegistry::locate`でのみ作られる。別の台帳で作られた参照を渡すと
/// `NotFound`として拒否される。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemRef {
    registry: RegistryId,
    slot: usize,
}

/// 同じ種類の資料をタイトルで管理する台帳
///
/// 資料は台帳が所有し、プロセスの寿命の間削除されない。
/// 変化するのは各資料の貸出状態のみ。
#[derive(Debug)]
pub struct ItemRegistry<T> {
    id: RegistryId,
    items: Vec<T>,
    slots: BTreeMap<Title, usize>,
}

impl<T: CatalogEntry> ItemRegistry<T> {
    /// 台帳を構築する
    ///
    /// # エラー
    /// - `Empty`: 資料が1件もない
    /// - `DuplicateTitle`: タイトルが重複している
    pub fn new(items: impl IntoIterator<Item = T>) -> std::result::Result<Self, RegistryError> {
        let mut items: Vec<T> = items.into_iter().collect();
        if items.is_empty() {
            return Err(RegistryError::Empty { kind: T::KIND });
        }
        items.sort_by(|a, b| a.title().cmp(b.title()));

        let mut slots = BTreeMap::new();
        for (slot, item) in items.iter().enumerate() {
            if slots.insert(item.title().clone(), slot).is_some() {
                return Err(RegistryError::DuplicateTitle {
                    kind: T::KIND,
                    title: item.title().clone(),
                });
            }
        }

        tracing::debug!(kind = T::KIND, count = items.len(), "registry created");

        Ok(Self {
            id: RegistryId::new(),
            items,
            slots,
        })
    }

    pub fn id(&self) -> RegistryId {
        self.id
    }

    /// 資料の種類名
    pub fn kind(&self) -> &'static str {
        T::KIND
    }

    /// 貸出可能な資料をタイトル昇順で返す（呼び出しのたびに再計算）
    pub fn list(&self) -> Vec<&T> {
        self.items.iter().filter(|item| item.is_available()).collect()
    }

    /// タイトルで検索する（副作用なし）
    pub fn find_by_title(&self, title: &str) -> Option<&T> {
        self.slots.get(title).map(|&slot| &self.items[slot])
    }

    /// タイトルから資料への参照を得る
    pub fn locate(&self, title: &str) -> Option<ItemRef> {
        self.slots.get(title).map(|&slot| ItemRef {
            registry: self.id,
            slot,
        })
    }

    /// 参照が指す資料を返す。他の台帳の参照なら`None`。
    pub fn get(&self, item: ItemRef) -> Option<&T> {
        if item.registry != self.id {
            return None;
        }
        self.items.get(item.slot)
    }

    fn get_mut(&mut self, item: ItemRef) -> Result<&mut T> {
        if item.registry != self.id {
            return Err(CatalogError::NotFound { kind: T::KIND });
        }
        self.items
            .get_mut(item.slot)
            .ok_or(CatalogError::NotFound { kind: T::KIND })
    }

    /// 資料を貸し出す
    ///
    /// # エラー
    /// - `NotFound`: この台帳の資料ではない
    /// - `NotAvailable`: 既に貸出中
    pub fn checkout(&mut self, item: ItemRef, borrower: Customer) -> Result<()> {
        let entry = self.get_mut(item)?;
        let library_number = borrower.library_number().clone();
        entry
            .checkout(borrower)
            .map_err(|err| state_error::<T>(err, entry.title()))?;

        tracing::info!(
            kind = T::KIND,
            title = %entry.title(),
            borrower = %library_number,
            "item checked out"
        );
        Ok(())
    }

    /// タイトルを指定して貸し出す
    pub fn checkout_by_title(&mut self, title: &str, borrower: Customer) -> Result<()> {
        let item = self
            .locate(title)
            .ok_or(CatalogError::NotFound { kind: T::KIND })?;
        self.checkout(item, borrower)
    }

    /// 資料を返却する。直前の借り手を返す。
    ///
    /// # エラー
    /// - `NotFound`: この台帳の資料ではない
    /// - `NotCheckedOut`: 貸出されていない
    pub fn return_item(&mut self, item: ItemRef) -> Result<Customer> {
        let entry = self.get_mut(item)?;
        let borrower = entry
            .return_item()
            .map_err(|err| state_error::<T>(err, entry.title()))?;

        tracing::info!(
            kind = T::KIND,
            title = %entry.title(),
            borrower = %borrower.library_number(),
            "item returned"
        );
        Ok(borrower)
    }

    /// タイトルを指定して返却する
    pub fn return_by_title(&mut self, title: &str) -> Result<Customer> {
        let item = self
            .locate(title)
            .ok_or(CatalogError::NotFound { kind: T::KIND })?;
        self.return_item(item)
    }
}

fn state_error<T: CatalogEntry>(err: ItemStateError, title: &Title) -> CatalogError {
    match err {
        ItemStateError::NotAvailable => CatalogError::NotAvailable {
            kind: T::KIND,
            title: title.clone(),
        },
        ItemStateError::NotCheckedOut => CatalogError::NotCheckedOut {
            kind: T::KIND,
            title: title.clone(),
        },
    }
}

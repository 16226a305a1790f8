//! # Store
//!
//! The single owner of session, cart, orders, addresses and appearance.
//!
//! ## Mutation Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    One Path for Every Change                            │
//! │                                                                         │
//! │  store.add_to_cart(&product)                                            │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  dispatch(Action::AddToCart(product))                                   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  reduce(): check preconditions ──► Err ──► warn!, state untouched       │
//! │         │                                                               │
//! │         ▼ all checks passed                                             │
//! │  mutate StoreState ──► Notice::AddedToCart                              │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  observers(&state, &notice)   (push to whatever renders it)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every reducer arm checks everything before its first write, so an error
//! never leaves a half-applied change behind.

use std::fmt;

use serde::Serialize;
use shop_core::validation::{validate_address, validate_required, validate_user_update};
use shop_core::{
    Address, AddressDraft, AddressUpdate, Catalog, CoreError, Credentials, Order, Product, Role,
    User, UserUpdate,
};
use tracing::{debug, info, warn};
use ts_rs::TS;

use crate::auth::Authenticator;
use crate::clock::{Clock, SystemClock};
use crate::config::StoreConfig;
use crate::error::{Alert, StoreError, StoreResult};
use crate::ids::{OrderIdGenerator, UuidOrderIds};
use crate::state::{AddressBook, Appearance, Cart, OrderHistory, StoreState};

// =============================================================================
// Actions
// =============================================================================

/// A request to change the store's state.
#[derive(Debug, Clone)]
pub enum Action {
    /// Install an already-resolved identity.
    SignIn(User),
    /// Clear the identity and the cart. Orders and addresses stay.
    SignOut,
    AddToCart(Product),
    RemoveFromCart(usize),
    /// Low-level order recording: prepend `order` if present, then empty the
    /// cart if `clear_cart`.
    PlaceOrder {
        order: Option<Order>,
        clear_cart: bool,
    },
    /// One order per cart line, then empty the cart.
    Checkout,
    UpdateUser(UserUpdate),
    AddAddress(AddressDraft),
    UpdateAddress {
        id: String,
        update: AddressUpdate,
    },
    RemoveAddress(String),
    ToggleTheme,
}

impl Action {
    /// Short name used in log fields.
    pub fn name(&self) -> &'static str {
        match self {
            Action::SignIn(_) => "sign_in",
            Action::SignOut => "sign_out",
            Action::AddToCart(_) => "add_to_cart",
            Action::RemoveFromCart(_) => "remove_from_cart",
            Action::PlaceOrder { .. } => "place_order",
            Action::Checkout => "checkout",
            Action::UpdateUser(_) => "update_user",
            Action::AddAddress(_) => "add_address",
            Action::UpdateAddress { .. } => "update_address",
            Action::RemoveAddress(_) => "remove_address",
            Action::ToggleTheme => "toggle_theme",
        }
    }
}

// =============================================================================
// Notices
// =============================================================================

/// What a successful action did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Notice {
    SignedIn { name: String, role: Role },
    SignedOut,
    AddedToCart { name: String },
    RemovedFromCart { name: String },
    OrderRecorded { id: Option<String>, cleared: bool },
    OrdersPlaced { ids: Vec<String> },
    ProfileUpdated,
    AddressAdded { id: String },
    AddressUpdated { id: String },
    AddressRemoved { id: String, removed: bool },
    ThemeChanged { appearance: Appearance },
}

impl Notice {
    /// The confirmation dialog a screen shows for this notice, if any.
    pub fn alert(&self) -> Option<Alert> {
        match self {
            Notice::AddedToCart { name } => {
                Some(Alert::confirm("Added", format!("{} added to cart", name)))
            }
            Notice::OrdersPlaced { .. } => {
                Some(Alert::confirm("Order Placed!", "Thank you for your purchase."))
            }
            Notice::ProfileUpdated => Some(Alert::confirm("Success", "Profile updated!")),
            _ => None,
        }
    }
}

// =============================================================================
// Observers
// =============================================================================

/// Receives the new state after every successful action.
pub type Observer = Box<dyn Fn(&StoreState, &Notice) + Send>;

/// Handle returned by [`Store::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

// =============================================================================
// Store
// =============================================================================

/// The application store.
///
/// ## Usage
/// ```rust
/// use shop_core::{demo_catalog, Credentials};
/// use shop_store::{DemoAuthenticator, Store, StoreConfig};
///
/// let mut store = Store::new(StoreConfig::default());
/// let auth = DemoAuthenticator::default();
///
/// store.sign_in(&auth, &Credentials::new("admin@test.com", "pw")).unwrap();
/// store.add_to_cart(demo_catalog().get("1").unwrap()).unwrap();
/// store.checkout().unwrap();
///
/// assert!(store.cart().is_empty());
/// assert_eq!(store.orders().len(), 1);
/// ```
pub struct Store {
    state: StoreState,
    config: StoreConfig,
    clock: Box<dyn Clock>,
    order_ids: Box<dyn OrderIdGenerator>,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("config", &self.config)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Store {
    /// Creates a store on the wall clock with UUID order ids.
    pub fn new(config: StoreConfig) -> Self {
        Self::with_collaborators(config, Box::new(SystemClock), Box::new(UuidOrderIds))
    }

    /// Creates a store with explicit time and id sources.
    pub fn with_collaborators(
        config: StoreConfig,
        clock: Box<dyn Clock>,
        order_ids: Box<dyn OrderIdGenerator>,
    ) -> Self {
        Store {
            state: StoreState::new(config.seed_address),
            config,
            clock,
            order_ids,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    #[inline]
    pub fn state(&self) -> &StoreState {
        &self.state
    }

    /// An owned copy of the whole state.
    pub fn snapshot(&self) -> StoreState {
        self.state.clone()
    }

    #[inline]
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    #[inline]
    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    #[inline]
    pub fn user(&self) -> Option<&User> {
        self.state.user()
    }

    #[inline]
    pub fn cart(&self) -> &Cart {
        self.state.cart()
    }

    #[inline]
    pub fn orders(&self) -> &OrderHistory {
        self.state.orders()
    }

    #[inline]
    pub fn addresses(&self) -> &AddressBook {
        self.state.addresses()
    }

    #[inline]
    pub fn appearance(&self) -> Appearance {
        self.state.appearance()
    }

    // -------------------------------------------------------------------------
    // Observers
    // -------------------------------------------------------------------------

    /// Registers an observer called after every successful action.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: Fn(&StoreState, &Notice) + Send + 'static,
    {
        self.next_subscription += 1;
        let id = SubscriptionId(self.next_subscription);
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Removes an observer. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    fn notify(&self, notice: &Notice) {
        for (_, observer) in &self.observers {
            observer(&self.state, notice);
        }
    }

    // -------------------------------------------------------------------------
    // Dispatch
    // -------------------------------------------------------------------------

    /// Applies an action. On success observers are notified; on failure
    /// nothing changes and nobody is notified.
    pub fn dispatch(&mut self, action: Action) -> StoreResult<Notice> {
        let name = action.name();
        match self.reduce(action) {
            Ok(notice) => {
                debug!(action = name, ?notice, "action applied");
                self.notify(&notice);
                Ok(notice)
            }
            Err(err) => {
                warn!(action = name, %err, "action rejected");
                Err(err)
            }
        }
    }

    fn reduce(&mut self, action: Action) -> StoreResult<Notice> {
        match action {
            Action::SignIn(user) => {
                validate_required("email", &user.email)?;
                info!(email = %user.email, role = ?user.role, "user signed in");
                let notice = Notice::SignedIn {
                    name: user.name.clone(),
                    role: user.role,
                };
                self.state.user = Some(user);
                Ok(notice)
            }

            Action::SignOut => {
                if let Some(user) = self.state.user.take() {
                    info!(email = %user.email, "user signed out");
                }
                self.state.cart.take_all();
                Ok(Notice::SignedOut)
            }

            Action::AddToCart(product) => {
                if !product.is_available() {
                    return Err(CoreError::OutOfStock {
                        product_id: product.id,
                        name: product.name,
                    }
                    .into());
                }
                self.state.cart.push(&product);
                Ok(Notice::AddedToCart { name: product.name })
            }

            Action::RemoveFromCart(index) => {
                let len = self.state.cart.len();
                let removed = self
                    .state
                    .cart
                    .remove_at(index)
                    .ok_or(StoreError::CartIndexOutOfRange { index, len })?;
                Ok(Notice::RemovedFromCart { name: removed.name })
            }

            Action::PlaceOrder { order, clear_cart } => {
                let id = order.as_ref().map(|o| o.id.clone());
                if let Some(order) = order {
                    self.state.orders.prepend(order);
                }
                if clear_cart {
                    self.state.cart.take_all();
                }
                Ok(Notice::OrderRecorded {
                    id,
                    cleared: clear_cart,
                })
            }

            Action::Checkout => {
                if self.state.cart.is_empty() {
                    return Err(StoreError::EmptyCart);
                }
                let placed_at = self.clock.now_local();
                let lines = self.state.cart.take_all();
                let mut ids = Vec::with_capacity(lines.len());
                for line in lines {
                    let order = Order::for_item(self.order_ids.next_id(), line, placed_at);
                    ids.push(order.id.clone());
                    self.state.orders.prepend(order);
                }
                info!(orders = ids.len(), "checkout complete");
                Ok(Notice::OrdersPlaced { ids })
            }

            Action::UpdateUser(update) => {
                let user = self.state.user.as_mut().ok_or(StoreError::NotSignedIn)?;
                validate_user_update(&update)?;
                user.apply(update);
                Ok(Notice::ProfileUpdated)
            }

            Action::AddAddress(draft) => {
                validate_address(&draft)?;
                let id = self
                    .state
                    .addresses
                    .next_id(self.clock.now().timestamp_millis());
                self.state
                    .addresses
                    .push(Address::from_draft(id.clone(), draft));
                Ok(Notice::AddressAdded { id })
            }

            Action::UpdateAddress { id, update } => {
                let mut merged = self
                    .state
                    .addresses
                    .get(&id)
                    .cloned()
                    .ok_or_else(|| StoreError::AddressNotFound(id.clone()))?;
                merged.apply(update.clone());
                validate_required("street", &merged.street)?;
                validate_required("city", &merged.city)?;

                self.state.addresses.update(&id, update);
                Ok(Notice::AddressUpdated { id })
            }

            Action::RemoveAddress(id) => {
                let removed = self.state.addresses.remove(&id);
                Ok(Notice::AddressRemoved { id, removed })
            }

            Action::ToggleTheme => {
                self.state.appearance = self.state.appearance.toggled();
                Ok(Notice::ThemeChanged {
                    appearance: self.state.appearance,
                })
            }
        }
    }

    // -------------------------------------------------------------------------
    // Named Operations
    // -------------------------------------------------------------------------

    /// Resolves credentials with `auth`, then signs the user in.
    ///
    /// A rejected credential pair leaves the user signed out.
    pub fn sign_in(
        &mut self,
        auth: &dyn Authenticator,
        credentials: &Credentials,
    ) -> StoreResult<Notice> {
        match auth.authenticate(credentials) {
            Ok(user) => self.sign_in_as(user),
            Err(err) => {
                warn!(action = "sign_in", %err, "action rejected");
                Err(err)
            }
        }
    }

    /// Installs an identity resolved elsewhere.
    pub fn sign_in_as(&mut self, user: User) -> StoreResult<Notice> {
        self.dispatch(Action::SignIn(user))
    }

    pub fn sign_out(&mut self) -> StoreResult<Notice> {
        self.dispatch(Action::SignOut)
    }

    /// Appends a snapshot of `product`. Zero-stock products are rejected.
    pub fn add_to_cart(&mut self, product: &Product) -> StoreResult<Notice> {
        self.dispatch(Action::AddToCart(product.clone()))
    }

    /// Looks the product up in `catalog` and adds it.
    pub fn add_to_cart_by_id(&mut self, catalog: &Catalog, product_id: &str) -> StoreResult<Notice> {
        let product = match catalog.require(product_id) {
            Ok(product) => product,
            Err(err) => {
                warn!(action = "add_to_cart", product_id, %err, "action rejected");
                return Err(err.into());
            }
        };
        self.add_to_cart(product)
    }

    /// Removes the cart line at `index`.
    pub fn remove_from_cart(&mut self, index: usize) -> StoreResult<Notice> {
        self.dispatch(Action::RemoveFromCart(index))
    }

    /// Records a prepared order and/or empties the cart.
    pub fn place_order(&mut self, order: Option<Order>, clear_cart: bool) -> StoreResult<Notice> {
        self.dispatch(Action::PlaceOrder { order, clear_cart })
    }

    /// Turns every cart line into its own order and empties the cart.
    pub fn checkout(&mut self) -> StoreResult<Notice> {
        self.dispatch(Action::Checkout)
    }

    pub fn update_user(&mut self, update: UserUpdate) -> StoreResult<Notice> {
        self.dispatch(Action::UpdateUser(update))
    }

    pub fn add_address(&mut self, draft: AddressDraft) -> StoreResult<Notice> {
        self.dispatch(Action::AddAddress(draft))
    }

    pub fn update_address(
        &mut self,
        id: impl Into<String>,
        update: AddressUpdate,
    ) -> StoreResult<Notice> {
        self.dispatch(Action::UpdateAddress {
            id: id.into(),
            update,
        })
    }

    /// Removes an address. Unknown ids are a no-op.
    pub fn remove_address(&mut self, id: impl Into<String>) -> StoreResult<Notice> {
        self.dispatch(Action::RemoveAddress(id.into()))
    }

    pub fn toggle_theme(&mut self) -> StoreResult<Notice> {
        self.dispatch(Action::ToggleTheme)
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::DemoAuthenticator;
    use crate::clock::FixedClock;
    use crate::error::AlertCode;
    use crate::ids::SequentialOrderIds;
    use chrono::{FixedOffset, NaiveDate, TimeZone, Utc};
    use shop_core::{demo_catalog, Money};
    use std::sync::{Arc, Mutex};

    fn test_store() -> Store {
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2026, 10, 19, 10, 0, 0).unwrap());
        Store::with_collaborators(
            StoreConfig::default(),
            Box::new(clock),
            Box::new(SequentialOrderIds::new()),
        )
    }

    fn product(id: &str) -> &'static Product {
        demo_catalog().get(id).unwrap()
    }

    fn signed_in_store() -> Store {
        let mut store = test_store();
        store
            .sign_in(
                &DemoAuthenticator::default(),
                &Credentials::new("shopper@example.com", "pw"),
            )
            .unwrap();
        store
    }

    // -------------------------------------------------------------------------
    // Session
    // -------------------------------------------------------------------------

    #[test]
    fn test_sign_in_with_empty_email_stays_signed_out() {
        let mut store = test_store();
        let err = store
            .sign_in(&DemoAuthenticator::default(), &Credentials::new("", "pw"))
            .unwrap_err();

        assert!(store.user().is_none());
        let alert = Alert::from(&err);
        assert_eq!(alert.code, AlertCode::ValidationError);
        assert_eq!(alert.message, "Please enter an email and password");
    }

    #[test]
    fn test_sign_in_with_empty_password_stays_signed_out() {
        let mut store = test_store();
        let result = store.sign_in(
            &DemoAuthenticator::default(),
            &Credentials::new("admin@test.com", ""),
        );
        assert!(result.is_err());
        assert!(store.user().is_none());
    }

    #[test]
    fn test_sign_in_with_whitespace_email() {
        let mut store = test_store();
        let notice = store
            .sign_in(&DemoAuthenticator::default(), &Credentials::new("  ", "pw"))
            .unwrap();

        assert_eq!(store.user().unwrap().role, Role::User);
        assert!(matches!(notice, Notice::SignedIn { role: Role::User, .. }));
    }

    #[test]
    fn test_sign_in_admin() {
        let mut store = test_store();
        let notice = store
            .sign_in(
                &DemoAuthenticator::default(),
                &Credentials::new("admin@test.com", "x"),
            )
            .unwrap();

        assert_eq!(store.user().unwrap().role, Role::Admin);
        assert_eq!(
            notice,
            Notice::SignedIn {
                name: "Gitanjali".to_string(),
                role: Role::Admin
            }
        );
    }

    #[test]
    fn test_sign_in_regular_user() {
        let store = signed_in_store();
        assert_eq!(store.user().unwrap().role, Role::User);
    }

    #[test]
    fn test_sign_out_clears_user_and_cart_only() {
        let mut store = signed_in_store();
        store.add_to_cart(product("1")).unwrap();
        store.add_to_cart(product("2")).unwrap();
        store.checkout().unwrap();
        store.add_to_cart(product("3")).unwrap();
        store
            .add_address(AddressDraft::new("9 Lake Rd", "Pune", "411001"))
            .unwrap();

        store.sign_out().unwrap();

        assert!(store.user().is_none());
        assert!(store.cart().is_empty());
        assert_eq!(store.orders().len(), 2);
        assert_eq!(store.addresses().len(), 2);
    }

    #[test]
    fn test_update_user_merges_fields() {
        let mut store = signed_in_store();
        let notice = store
            .update_user(UserUpdate {
                name: Some("Rahul S.".to_string()),
                ..UserUpdate::default()
            })
            .unwrap();

        let user = store.user().unwrap();
        assert_eq!(user.name, "Rahul S.");
        assert_eq!(user.email, "shopper@example.com");
        assert_eq!(user.phone, "9988776655");
        assert_eq!(notice.alert().unwrap().message, "Profile updated!");
    }

    #[test]
    fn test_update_user_requires_session() {
        let mut store = test_store();
        let err = store.update_user(UserUpdate::default()).unwrap_err();
        assert!(matches!(err, StoreError::NotSignedIn));
    }

    #[test]
    fn test_update_user_rejects_blank_name() {
        let mut store = signed_in_store();
        let err = store
            .update_user(UserUpdate {
                name: Some(String::new()),
                phone: Some("1".to_string()),
                ..UserUpdate::default()
            })
            .unwrap_err();

        assert!(err.is_validation());
        assert_eq!(store.user().unwrap().phone, "9988776655");
    }

    // -------------------------------------------------------------------------
    // Cart
    // -------------------------------------------------------------------------

    #[test]
    fn test_add_out_of_stock_is_rejected() {
        let mut store = signed_in_store();
        let keyboard = product("5");
        assert_eq!(keyboard.stock, 0);

        let err = store.add_to_cart(keyboard).unwrap_err();

        assert!(store.cart().is_empty());
        assert_eq!(Alert::from(&err).code, AlertCode::OutOfStock);
    }

    #[test]
    fn test_add_in_stock_appends_snapshot() {
        let mut store = signed_in_store();
        store.add_to_cart(product("1")).unwrap();
        let before = store.cart().len();

        let notice = store.add_to_cart(product("4")).unwrap();

        assert_eq!(store.cart().len(), before + 1);
        assert_eq!(store.cart().items().last().unwrap(), product("4"));
        let alert = notice.alert().unwrap();
        assert_eq!(alert.title, "Added");
        assert_eq!(alert.message, "RGB Gaming Mouse added to cart");
    }

    #[test]
    fn test_add_does_not_touch_stock() {
        let mut store = signed_in_store();
        store.add_to_cart(product("6")).unwrap();
        store.checkout().unwrap();
        assert_eq!(product("6").stock, 5);
    }

    #[test]
    fn test_add_by_unknown_id() {
        let mut store = signed_in_store();
        let err = store.add_to_cart_by_id(demo_catalog(), "404").unwrap_err();
        assert!(matches!(err, StoreError::Core(CoreError::ProductNotFound(_))));
    }

    #[test]
    fn test_remove_from_cart_preserves_order() {
        let mut store = signed_in_store();
        for id in ["1", "2", "3"] {
            store.add_to_cart_by_id(demo_catalog(), id).unwrap();
        }

        store.remove_from_cart(0).unwrap();

        let ids: Vec<&str> = store.cart().items().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3"]);
    }

    #[test]
    fn test_remove_from_cart_out_of_range() {
        let mut store = signed_in_store();
        store.add_to_cart(product("1")).unwrap();

        let err = store.remove_from_cart(5).unwrap_err();

        assert!(matches!(
            err,
            StoreError::CartIndexOutOfRange { index: 5, len: 1 }
        ));
        assert_eq!(store.cart().len(), 1);
    }

    // -------------------------------------------------------------------------
    // Orders
    // -------------------------------------------------------------------------

    #[test]
    fn test_checkout_creates_one_order_per_line() {
        let mut store = signed_in_store();
        store.add_to_cart(product("1")).unwrap();
        store.add_to_cart(product("2")).unwrap();

        let notice = store.checkout().unwrap();

        assert!(store.cart().is_empty());
        let orders = store.orders().all();
        assert_eq!(orders.len(), 2);
        // Each line is prepended in cart order, so the last line comes first.
        assert_eq!(orders[0].items, vec![product("2").clone()]);
        assert_eq!(orders[1].items, vec![product("1").clone()]);
        assert_eq!(orders[0].total, Money::from_units(5499));
        assert_eq!(
            notice,
            Notice::OrdersPlaced {
                ids: vec!["ORD-0001".to_string(), "ORD-0002".to_string()]
            }
        );
        assert_eq!(notice.alert().unwrap().title, "Order Placed!");
    }

    #[test]
    fn test_checkout_sets_arrival_from_delivery_days() {
        let mut store = signed_in_store();
        store.add_to_cart(product("6")).unwrap();
        store.checkout().unwrap();

        let order = &store.orders().all()[0];
        assert_eq!(order.arrival, NaiveDate::from_ymd_opt(2026, 10, 26).unwrap());
        assert_eq!(order.date_label(), "19 Oct 2026");
    }

    #[test]
    fn test_checkout_dates_follow_shopper_offset() {
        // 21:00 UTC on the 18th is already the 19th in India.
        let ist = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
        let at = Utc.with_ymd_and_hms(2026, 10, 18, 21, 0, 0).unwrap();
        let mut store = Store::with_collaborators(
            StoreConfig::default(),
            Box::new(FixedClock::with_offset(at, ist)),
            Box::new(SequentialOrderIds::new()),
        );
        store.add_to_cart(product("4")).unwrap();
        store.checkout().unwrap();

        let order = &store.orders().all()[0];
        assert_eq!(order.date_label(), "19 Oct 2026");
        assert_eq!(order.arrival_label(), "Tue, Oct 20");
        assert_eq!(order.placed_at, at);
    }

    #[test]
    fn test_checkout_empty_cart() {
        let mut store = signed_in_store();
        assert!(matches!(store.checkout(), Err(StoreError::EmptyCart)));
        assert!(store.orders().is_empty());
    }

    #[test]
    fn test_place_order_split_protocol() {
        let mut store = signed_in_store();
        store.add_to_cart(product("1")).unwrap();
        store.add_to_cart(product("3")).unwrap();

        let now = store.clock().now();
        let lines = store.cart().items().to_vec();
        for (i, line) in lines.into_iter().enumerate() {
            let order = Order::for_item(format!("manual-{}", i), line, now);
            store.place_order(Some(order), false).unwrap();
        }
        assert_eq!(store.cart().len(), 2);

        let notice = store.place_order(None, true).unwrap();

        assert_eq!(
            notice,
            Notice::OrderRecorded {
                id: None,
                cleared: true
            }
        );
        assert!(store.cart().is_empty());
        let ids: Vec<&str> = store.orders().all().iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["manual-1", "manual-0"]);
    }

    // -------------------------------------------------------------------------
    // Addresses
    // -------------------------------------------------------------------------

    #[test]
    fn test_add_address_assigns_timestamp_id() {
        let mut store = test_store();
        let now_millis = store.clock().now().timestamp_millis();

        let first = store
            .add_address(AddressDraft::new("9 Lake Rd", "Pune", ""))
            .unwrap();
        let second = store
            .add_address(AddressDraft::new("10 Lake Rd", "Pune", ""))
            .unwrap();

        assert_eq!(
            first,
            Notice::AddressAdded {
                id: now_millis.to_string()
            }
        );
        assert_eq!(
            second,
            Notice::AddressAdded {
                id: (now_millis + 1).to_string()
            }
        );
        assert_eq!(store.addresses().len(), 3);
    }

    #[test]
    fn test_add_address_requires_street_and_city() {
        let mut store = test_store();
        let err = store
            .add_address(AddressDraft::new("", "Pune", "411001"))
            .unwrap_err();

        assert_eq!(Alert::from(&err).message, "Fill all fields");
        assert_eq!(store.addresses().len(), 1);
    }

    #[test]
    fn test_update_address_street_only() {
        let mut store = test_store();
        store
            .add_address(AddressDraft::new("9 Lake Rd", "Pune", "411001"))
            .unwrap();
        let other = store.addresses().all()[1].clone();

        store
            .update_address(
                "1",
                AddressUpdate {
                    street: Some("New St".to_string()),
                    ..AddressUpdate::default()
                },
            )
            .unwrap();

        let updated = store.addresses().get("1").unwrap();
        assert_eq!(updated.id, "1");
        assert_eq!(updated.street, "New St");
        assert_eq!(updated.city, "Mumbai");
        assert_eq!(updated.zip, "400708");
        assert_eq!(store.addresses().get(&other.id).unwrap(), &other);
    }

    #[test]
    fn test_update_address_rejects_empty_city() {
        let mut store = test_store();
        let err = store
            .update_address(
                "1",
                AddressUpdate {
                    city: Some(String::new()),
                    ..AddressUpdate::default()
                },
            )
            .unwrap_err();

        assert!(err.is_validation());
        assert_eq!(store.addresses().get("1").unwrap().city, "Mumbai");
    }

    #[test]
    fn test_update_unknown_address() {
        let mut store = test_store();
        let err = store
            .update_address("missing", AddressUpdate::default())
            .unwrap_err();
        assert!(matches!(err, StoreError::AddressNotFound(ref id) if id == "missing"));
    }

    #[test]
    fn test_remove_address_absent_is_noop() {
        let mut store = test_store();
        let notice = store.remove_address("missing").unwrap();
        assert_eq!(
            notice,
            Notice::AddressRemoved {
                id: "missing".to_string(),
                removed: false
            }
        );
        assert_eq!(store.addresses().len(), 1);

        store.remove_address("1").unwrap();
        assert!(store.addresses().is_empty());
    }

    // -------------------------------------------------------------------------
    // Appearance & Observers
    // -------------------------------------------------------------------------

    #[test]
    fn test_toggle_theme() {
        let mut store = test_store();
        store.toggle_theme().unwrap();
        assert!(store.appearance().is_dark());
        store.toggle_theme().unwrap();
        assert_eq!(store.appearance(), Appearance::Light);
    }

    #[test]
    fn test_observers_see_successful_changes_only() {
        let mut store = signed_in_store();
        let seen: Arc<Mutex<Vec<usize>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        store.subscribe(move |state, _notice| {
            sink.lock().unwrap().push(state.cart().len());
        });

        store.add_to_cart(product("1")).unwrap();
        let _ = store.add_to_cart(product("5"));
        store.add_to_cart(product("2")).unwrap();

        assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_unsubscribe() {
        let mut store = test_store();
        let count = Arc::new(Mutex::new(0));
        let sink = Arc::clone(&count);
        let id = store.subscribe(move |_, _| *sink.lock().unwrap() += 1);

        store.toggle_theme().unwrap();
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.toggle_theme().unwrap();

        assert_eq!(*count.lock().unwrap(), 1);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut store = signed_in_store();
        let before = store.snapshot();
        store.add_to_cart(product("1")).unwrap();
        assert!(before.cart().is_empty());
        assert_eq!(store.cart().len(), 1);
    }
}

//! `ProductModal` component.

use super::browser::DomRegion;
use crate::controller::{FavoriteController, FavoriteState};
use crate::dismiss::{ListenerSlot, OutsideClick};
use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use turbo_commerce::catalog::{ProductDisplay, ProductRecord};
use turbo_commerce::{Currency, FavoriteId};

/// Bootstrap modal with the product's details and a favorite toggle.
///
/// Renders nothing while `product` is `None`. While `show` is true the
/// favorite state is looked up and a press outside `.modal-content` closes
/// the modal. A successful removal reports the favorite id and closes.
#[component]
pub fn ProductModal(
    /// Product to show, as delivered by any catalog source.
    #[prop(into)]
    product: Signal<Option<ProductRecord>>,
    /// Whether the modal is open.
    #[prop(into)]
    show: Signal<bool>,
    /// Called when the modal should close.
    on_close: Callback<()>,
    /// Called with the id of a favorite removed from the modal.
    #[prop(optional)]
    on_remove_favorite: Option<Callback<FavoriteId>>,
    /// Favorites backend access; see `browser_controller`.
    controller: FavoriteController,
    /// Currency symbol for numeric prices (default: the controller's).
    #[prop(optional)]
    currency: Option<Currency>,
) -> impl IntoView {
    let locale = controller.locale();
    let currency = currency.unwrap_or_else(|| controller.currency());
    let labels = locale.display_labels();
    let rating_labels = labels.clone();

    let controller = StoredValue::new_local(controller);
    let favorite = RwSignal::new(FavoriteState::NotFavorited);
    let content = NodeRef::<html::Div>::new();
    // Dropping the slot with the component removes the listener.
    let listener = StoredValue::new_local(ListenerSlot::<WindowListenerHandle>::new());

    let display = Memo::new(move |_| {
        product.with(|record| {
            record
                .as_ref()
                .map(|record| ProductDisplay::from_record(record, &labels))
        })
    });

    // Results are applied in arrival order, so a slow lookup can overwrite
    // a newer one.
    Effect::new(move |_| {
        let visible = show.get();
        let record = product.get();
        let controller = controller.get_value();
        spawn_local(async move {
            if let Some(state) = controller.refresh(visible, record.as_ref()).await {
                favorite.set(state);
            }
        });
    });

    Effect::new(move |_| {
        let visible = show.get();
        listener.update_value(|slot| {
            slot.sync(visible, || {
                let dismiss = OutsideClick::new(DomRegion::new(content), move || on_close.run(()));
                window_event_listener(ev::mousedown, move |event: web_sys::MouseEvent| {
                    if let Some(target) = event.target() {
                        dismiss.handle(&target);
                    }
                })
            });
        });
    });

    let toggle = move |_: web_sys::MouseEvent| {
        let Some(record) = product.get_untracked() else {
            return;
        };
        let current = favorite.get_untracked();
        let controller = controller.get_value();
        spawn_local(async move {
            let outcome = controller.toggle(&record, &current).await;
            outcome.apply(
                |state| favorite.set(state),
                |id| {
                    if let Some(on_remove_favorite) = on_remove_favorite {
                        on_remove_favorite.run(id);
                    }
                },
                || on_close.run(()),
            );
        });
    };

    let is_favorite = move || favorite.with(FavoriteState::is_favorite);

    move || {
        display.get().map(|details| {
            let rating = details.rating_line(&rating_labels);
            let price = details.price_text(currency);
            let store = format!("{}: {}", locale.store_caption(), details.store);

            view! {
                <div
                    class=move || if show.get() { "modal fade show d-block" } else { "modal fade" }
                    tabindex="-1"
                    style="background-color: rgba(0,0,0,0.5);"
                >
                    <div class="modal-dialog modal-lg modal-dialog-centered">
                        <div class="modal-content" node_ref=content>
                            <div class="modal-header justify-content-between align-items-center">
                                <h5 class="modal-title">{details.title.clone()}</h5>
                                <div class="d-flex align-items-center">
                                    <button
                                        class="btn btn-outline-danger me-2"
                                        style="font-size: 1.5rem;"
                                        title=move || locale.toggle_title(is_favorite())
                                        on:click=toggle
                                    >
                                        <i
                                            class=move || if is_favorite() { "bi bi-heart-fill" } else { "bi bi-heart" }
                                            style="font-size: 2rem;"
                                        ></i>
                                    </button>
                                </div>
                            </div>

                            <div class="modal-body d-flex flex-column align-items-center">
                                <div class="text-center mb-4">
                                    <img
                                        src=details.image_url.clone()
                                        alt=details.title.clone()
                                        class="img-fluid rounded"
                                        style="max-width: 300px;"
                                    />
                                    <div class="text-warning fw-bold mt-2">{rating}</div>
                                </div>
                                <div class="w-100 text-center">
                                    <p class="mb-4">{details.description.clone()}</p>
                                    <h4 class="text-success">{price}</h4>
                                </div>
                            </div>

                            <div class="modal-footer justify-content-center">
                                <span class="text-muted">{store}</span>
                            </div>
                        </div>
                    </div>
                </div>
            }
        })
    }
}

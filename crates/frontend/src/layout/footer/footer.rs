use chrono::{Datelike, Local};
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let year = Local::now().year();

    view! {
        <footer data-zone="footer" class="footer">
            <div class="footer__content">
                <div class="footer__about">
                    <div class="footer__brand">
                        <div class="brand-logo"><div class="brand-logo__dot"></div></div>
                        <h3>"Peta Bercerita"</h3>
                    </div>
                    <p>"Menjelajahi kekayaan sejarah dan budaya Indonesia melalui peta interaktif."</p>
                </div>
                <div class="footer__contact">
                    <h4>"Kontak"</h4>
                    <div class="footer__links">
                        <a href="#">"Email"</a>
                        <a href="#">"Instagram"</a>
                        <a href="#">"Twitter"</a>
                    </div>
                </div>
            </div>
            <div class="footer__bottom">
                <p>{format!("© {} Peta Bercerita. Semua hak dilindungi.", year)}</p>
            </div>
        </footer>
    }
}

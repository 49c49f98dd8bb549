use yew::prelude::*;

use crate::forms::contact::ContactForm;

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <div class="contact-page">
            <style>
                {r#"
                    .contact-page {
                        max-width: 720px;
                        margin: 0 auto;
                        padding: 6rem 2rem 4rem;
                    }
                    .contact-details {
                        margin-bottom: 2.5rem;
                        color: #555;
                    }
                    .site-form .form-group {
                        margin-bottom: 1.25rem;
                        display: flex;
                        flex-direction: column;
                    }
                    .site-form label {
                        margin-bottom: 0.35rem;
                        font-weight: 600;
                    }
                    .form-control {
                        padding: 0.6rem 0.8rem;
                        border: 1px solid #CFC9BA;
                        border-radius: 8px;
                        font-size: 1rem;
                    }
                    .form-control.is-invalid {
                        border-color: #C0504D;
                        background: #FBF3F2;
                    }
                    .invalid-feedback {
                        color: #C0504D;
                        font-size: 0.85rem;
                        margin-top: 0.3rem;
                    }
                    .alert {
                        padding: 0.9rem 1.1rem;
                        border-radius: 8px;
                        margin-bottom: 1.25rem;
                    }
                    .alert-success {
                        background: #EEF5EE;
                        color: #36593A;
                        border: 1px solid #7A9E7E;
                    }
                    .btn-primary {
                        background: #7A9E7E;
                        color: #fff;
                        border: none;
                        border-radius: 8px;
                        padding: 0.7rem 1.6rem;
                        font-size: 1rem;
                        cursor: pointer;
                    }
                    .btn-primary:disabled {
                        opacity: 0.6;
                        cursor: default;
                    }
                "#}
            </style>

            <h1>{"Say hello"}</h1>
            <div class="contact-details">
                <p>{"Asana Studio, 14 Temple Road, City Center"}</p>
                <p>{"Open daily 06:00 – 21:00"}</p>
            </div>
            <ContactForm />
        </div>
    }
}

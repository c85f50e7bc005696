//! The transfer form markup shared by the form page and the HTMX partials.

use maud::{Markup, html};

use crate::{
    endpoints::{self, format_endpoint},
    html::{
        BUTTON_PRIMARY_STYLE, BUTTON_SECONDARY_STYLE, FORM_ERROR_STYLE, FORM_LABEL_STYLE,
        FORM_TEXT_INPUT_STYLE, loading_spinner,
    },
    transfer::{Field, FieldErrors, TransferForm},
};

/// The banks offered in the bank select input.
pub const BANKS: [&str; 16] = [
    "Access Bank",
    "Ecobank",
    "Fidelity Bank",
    "First Bank of Nigeria",
    "First City Monument Bank",
    "Guaranty Trust Bank",
    "Kuda Bank",
    "Moniepoint",
    "Opay",
    "PalmPay",
    "Polaris Bank",
    "Stanbic IBTC Bank",
    "Sterling Bank",
    "United Bank for Africa",
    "Wema Bank",
    "Zenith Bank",
];

pub(crate) const FORM_ID: &str = "transfer-form";
pub(crate) const PREVIEW_ID: &str = "sms-preview";

/// The ID of the element wrapping a field's label, input and error message.
pub(crate) fn field_container_id(field: Field) -> String {
    format!("{}-field", field.name())
}

/// Render the whole transfer form filled in with `form` and showing `errors`.
pub(crate) fn transfer_form(form: &TransferForm, errors: &FieldErrors) -> Markup {
    let spinner = loading_spinner();

    html! {
        form
            id=(FORM_ID)
            hx-post=(endpoints::SUBMIT_TRANSACTION)
            hx-target="this"
            hx-swap="outerHTML"
            hx-indicator="#indicator"
            class="w-full space-y-4 md:space-y-6"
        {
            h2 class="text-xl font-bold" { "New Transfer" }

            @for field in Field::ALL {
                (field_input(field, form.value(field), errors.get(field)))
            }

            button type="submit" id="submit-button" tabindex="0" class=(BUTTON_PRIMARY_STYLE)
            {
                span id="indicator" class="inline htmx-indicator"
                {
                    (spinner)
                }
                " Send Transfer"
            }

            button
                type="button"
                hx-post=(endpoints::PREVIEW_API)
                hx-include={ "#" (FORM_ID) }
                hx-target={ "#" (PREVIEW_ID) }
                class=(BUTTON_SECONDARY_STYLE)
            {
                "Preview Message"
            }
        }
    }
}

/// Render the label, input and error message for `field`.
///
/// The input posts its value to the field endpoint as it is edited, which
/// replaces this markup with the normalized value and any error.
pub(crate) fn field_input(field: Field, value: &str, error: Option<&str>) -> Markup {
    let container_id = field_container_id(field);
    let name = field.name();
    let field_route = format_endpoint(endpoints::FIELD_API, name);
    let hx_target = format!("#{container_id}");
    // Lets the handler tell a keystroke apart from the user leaving the input.
    let hx_vals = "js:{trigger: event.type}";

    html! {
        div id=(container_id)
        {
            label for=(name) class=(FORM_LABEL_STYLE) { (field.label()) }

            @match field {
                Field::BankName => {
                    select
                        name=(name)
                        id=(name)
                        required
                        hx-post=(field_route)
                        hx-trigger="change"
                        hx-target=(hx_target)
                        hx-swap="outerHTML"
                        hx-vals=(hx_vals)
                        class=(FORM_TEXT_INPUT_STYLE)
                    {
                        option value="" selected[value.is_empty()] { "Select a bank" }

                        @for bank in BANKS {
                            option value=(bank) selected[bank == value] { (bank) }
                        }
                    }
                }
                Field::Amount => {
                    // w-full needed to ensure input takes the full width when prefilled with a value
                    div class="input-wrapper w-full"
                    {
                        input
                            name=(name)
                            id=(name)
                            type="text"
                            inputmode="decimal"
                            placeholder="0.00"
                            required
                            value=(value)
                            hx-post=(field_route)
                            hx-trigger="input changed delay:500ms, blur"
                            hx-target=(hx_target)
                            hx-swap="outerHTML"
                            hx-vals=(hx_vals)
                            class=(FORM_TEXT_INPUT_STYLE);
                    }
                }
                _ => {
                    input
                        name=(name)
                        id=(name)
                        type=(input_type(field))
                        inputmode=[input_mode(field)]
                        placeholder=[placeholder(field)]
                        autofocus[field == Field::AccountName]
                        required
                        value=(value)
                        hx-post=(field_route)
                        hx-trigger="input changed delay:500ms, blur"
                        hx-target=(hx_target)
                        hx-swap="outerHTML"
                        hx-vals=(hx_vals)
                        class=(FORM_TEXT_INPUT_STYLE);
                }
            }

            @if let Some(error) = error {
                p class=(FORM_ERROR_STYLE) { (error) }
            }
        }
    }
}

fn input_type(field: Field) -> &'static str {
    match field {
        Field::PhoneNumber => "tel",
        Field::TransactionDate => "datetime-local",
        _ => "text",
    }
}

fn input_mode(field: Field) -> Option<&'static str> {
    match field {
        Field::AccountNumber => Some("numeric"),
        _ => None,
    }
}

fn placeholder(field: Field) -> Option<&'static str> {
    match field {
        Field::AccountName => Some("Account holder's name"),
        Field::AccountNumber => Some("0123456789"),
        Field::PhoneNumber => Some("0801 2345 678"),
        Field::Narration => Some("What is the transfer for?"),
        _ => None,
    }
}

#[cfg(test)]
mod form_tests {
    use scraper::{Html, Selector};

    use crate::{
        endpoints,
        test_utils::{
            assert_form_error_message, assert_form_input, assert_form_input_with_value,
            assert_form_submit_button_with_text, assert_hx_endpoint, assert_valid_html,
            must_get_form,
        },
        transfer::{Field, FieldErrors, TransferForm, validate_transfer},
    };

    use super::{BANKS, field_input, transfer_form};

    fn render_form(form: &TransferForm, errors: &FieldErrors) -> Html {
        Html::parse_fragment(&transfer_form(form, errors).into_string())
    }

    #[test]
    fn form_has_an_input_for_every_field() {
        let html = render_form(&TransferForm::default(), &FieldErrors::default());
        assert_valid_html(&html);

        let form = must_get_form(&html);
        assert_hx_endpoint(&form, endpoints::SUBMIT_TRANSACTION, "hx-post");
        assert_form_input(&form, "accountName", "text");
        assert_form_input(&form, "accountNumber", "text");
        assert_form_input(&form, "phoneNumber", "tel");
        assert_form_input(&form, "amount", "text");
        assert_form_input(&form, "narration", "text");
        assert_form_input(&form, "transactionDate", "datetime-local");
        assert_form_submit_button_with_text(&form, "Send Transfer");

        let select = form
            .select(&Selector::parse("select[name=bankName]").unwrap())
            .next()
            .expect("No bank select found");
        let option_count = select.select(&Selector::parse("option").unwrap()).count();
        assert_eq!(option_count, BANKS.len() + 1);
    }

    #[test]
    fn form_keeps_values_and_shows_errors() {
        let submitted = TransferForm {
            account_name: "A".to_owned(),
            amount: "1,000".to_owned(),
            ..Default::default()
        };
        let errors = validate_transfer(&submitted).unwrap_err();

        let html = render_form(&submitted, &errors);

        assert_valid_html(&html);
        let form = must_get_form(&html);
        assert_form_input_with_value(&form, "accountName", "text", "A");
        assert_form_input_with_value(&form, "amount", "text", "1,000");
        let error_selector = Selector::parse("p.text-red-500").unwrap();
        let messages: Vec<String> = form
            .select(&error_selector)
            .map(|p| p.text().collect::<String>())
            .collect();
        assert!(messages.contains(&"Account name must be at least 2 characters".to_owned()));
        assert!(!messages.contains(&"Please enter a valid amount".to_owned()));
        assert_eq!(messages.len(), errors.len());
    }

    #[test]
    fn selected_bank_is_kept() {
        let form = TransferForm {
            bank_name: BANKS[3].to_owned(),
            ..Default::default()
        };

        let html = render_form(&form, &FieldErrors::default());

        let selected: Vec<String> = html
            .select(&Selector::parse("option[selected]").unwrap())
            .map(|option| option.value().attr("value").unwrap_or_default().to_owned())
            .collect();
        assert_eq!(selected, vec![BANKS[3].to_owned()]);
    }

    #[test]
    fn field_input_posts_to_its_field_endpoint() {
        let html = Html::parse_fragment(
            &field_input(Field::PhoneNumber, "0801 2345 678", None).into_string(),
        );

        let input = html
            .select(&Selector::parse("input[name=phoneNumber]").unwrap())
            .next()
            .expect("No phone number input found");
        assert_eq!(input.value().attr("hx-post"), Some("/api/fields/phoneNumber"));
        assert_eq!(input.value().attr("hx-target"), Some("#phoneNumber-field"));
        assert_eq!(input.value().attr("value"), Some("0801 2345 678"));
    }

    #[test]
    fn field_input_shows_error() {
        let html = Html::parse_fragment(
            &field_input(Field::Narration, "", Some("Narration is required")).into_string(),
        );

        let container = html
            .select(&Selector::parse("#narration-field").unwrap())
            .next()
            .expect("No field container found");
        assert_form_error_message(&container, "Narration is required");
    }
}

//! Localized user-facing strings
//!
//! Templates use `{name}` placeholders filled by [`render`].

use super::Language;

/// Title and description of one selectable row
#[derive(Debug, Clone, Copy)]
pub struct RowText {
    pub title: &'static str,
    pub description: &'static str,
}

const fn row(title: &'static str, description: &'static str) -> RowText {
    RowText { title, description }
}

/// Every string the bot sends, for one locale
#[derive(Debug)]
pub struct Texts {
    pub main_menu_header: &'static str,
    pub main_menu_body: &'static str,
    pub menu_button: &'static str,
    pub menu_section: &'static str,
    /// Same order as `MAIN_MENU_IDS`
    pub main_menu_rows: [RowText; 5],

    pub order_menu_header: &'static str,
    pub order_menu_body: &'static str,
    /// Same order as `ORDER_MENU_IDS`
    pub order_menu_rows: [RowText; 2],

    pub product_list_header: &'static str,
    pub product_list_body: &'static str,
    pub product_button: &'static str,

    /// `{rate}`
    pub welcome: &'static str,
    /// Sent instead of `welcome` when no rate can be quoted
    pub welcome_no_rate: &'static str,
    pub help: &'static str,
    pub points_info: &'static str,
    pub orders_info: &'static str,
    pub support_info: &'static str,

    /// `{product}`
    pub quantity_prompt: &'static str,
    pub quantity_reprompt: &'static str,
    pub select_product_reprompt: &'static str,

    pub confirm_header: &'static str,
    /// `{quantity}`, `{product}`, `{weight}`, `{rate}`, `{total}`
    pub confirm_body: &'static str,
    /// `{quantity}`, `{product}`, `{weight}`
    pub confirm_body_no_rate: &'static str,
    pub confirm_button: &'static str,
    pub cancel_button: &'static str,
    pub use_buttons_reprompt: &'static str,

    /// `{order_id}`
    pub order_placed: &'static str,
    pub order_cancelled: &'static str,

    pub language_changed: &'static str,
}

/// Strings for `lang`
pub fn texts(lang: Language) -> &'static Texts {
    match lang {
        Language::English => &ENGLISH,
        Language::Hindi => &HINDI,
        Language::Tamil => &TAMIL,
        Language::Telugu => &TELUGU,
    }
}

/// Replace each `{key}` in `template` with its value
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    vars.iter().fold(template.to_string(), |acc, (key, value)| {
        acc.replace(&format!("{{{key}}}"), value)
    })
}

static ENGLISH: Texts = Texts {
    main_menu_header: "Main Menu",
    main_menu_body: "Choose an option below.",
    menu_button: "Options",
    menu_section: "Menu",
    main_menu_rows: [
        row("My Points", "See your reward points"),
        row("My Orders", "See your past orders"),
        row("Support", "Talk to our team"),
        row("Change Language", "Pick another language"),
        row("Create Order", "Start a new order"),
    ],
    order_menu_header: "Orders",
    order_menu_body: "What would you like to do?",
    order_menu_rows: [
        row("Browse Products", "See our collection"),
        row("Back", "Return to the main menu"),
    ],
    product_list_header: "Our Collection",
    product_list_body: "Pick a product.",
    product_button: "Products",
    welcome: "Welcome to Golden Jewels! Today's gold rate: {rate} per gram.\nType *order* to place an order or *menu* for more options.",
    welcome_no_rate: "Welcome to Golden Jewels! Today's gold rate is unavailable right now, please check back soon.\nType *order* to place an order or *menu* for more options.",
    help: "Type *hi* for today's gold rate, *order* to place an order, or *menu* for all options.",
    points_info: "You have no reward points yet.",
    orders_info: "Your past orders will appear here soon.",
    support_info: "For help, write to support@goldenjewels.example.",
    quantity_prompt: "How many {product} pieces would you like? Reply with a number.",
    quantity_reprompt: "Please enter the quantity as a whole number, e.g. 2.",
    select_product_reprompt: "Please select a product from the list.",
    confirm_header: "Confirm your order",
    confirm_body: "{quantity} × {product} ({weight} g each)\nRate: {rate} per gram\nTotal: {total}",
    confirm_body_no_rate: "{quantity} × {product} ({weight} g each)\nThe gold rate is unavailable right now, so the total will be confirmed with you later.",
    confirm_button: "Confirm",
    cancel_button: "Cancel",
    use_buttons_reprompt: "Please use the Confirm or Cancel buttons.",
    order_placed: "Your order is confirmed. Order id: {order_id}",
    order_cancelled: "Your order has been cancelled.",
    language_changed: "Language changed to English.",
};

static HINDI: Texts = Texts {
    main_menu_header: "मुख्य मेनू",
    main_menu_body: "नीचे से एक विकल्प चुनें।",
    menu_button: "विकल्प",
    menu_section: "मेनू",
    main_menu_rows: [
        row("मेरे पॉइंट्स", "अपने रिवॉर्ड पॉइंट्स देखें"),
        row("मेरे ऑर्डर", "अपने पिछले ऑर्डर देखें"),
        row("सहायता", "हमारी टीम से बात करें"),
        row("भाषा बदलें", "दूसरी भाषा चुनें"),
        row("ऑर्डर करें", "नया ऑर्डर शुरू करें"),
    ],
    order_menu_header: "ऑर्डर",
    order_menu_body: "आप क्या करना चाहेंगे?",
    order_menu_rows: [
        row("उत्पाद देखें", "हमारा कलेक्शन देखें"),
        row("वापस", "मुख्य मेनू पर लौटें"),
    ],
    product_list_header: "हमारा कलेक्शन",
    product_list_body: "एक उत्पाद चुनें।",
    product_button: "उत्पाद",
    welcome: "गोल्डन ज्वेल्स में आपका स्वागत है! आज का सोने का भाव: {rate} प्रति ग्राम।\nऑर्डर के लिए *order* या विकल्पों के लिए *menu* लिखें।",
    welcome_no_rate: "गोल्डन ज्वेल्स में आपका स्वागत है! आज का सोने का भाव अभी उपलब्ध नहीं है, कृपया थोड़ी देर बाद देखें।\nऑर्डर के लिए *order* या विकल्पों के लिए *menu* लिखें।",
    help: "आज का भाव देखने के लिए *hi*, ऑर्डर के लिए *order*, या सभी विकल्पों के लिए *menu* लिखें।",
    points_info: "आपके पास अभी कोई रिवॉर्ड पॉइंट नहीं है।",
    orders_info: "आपके पिछले ऑर्डर जल्द ही यहाँ दिखेंगे।",
    support_info: "सहायता के लिए support@goldenjewels.example पर लिखें।",
    quantity_prompt: "आपको कितने {product} चाहिए? संख्या में उत्तर दें।",
    quantity_reprompt: "कृपया मात्रा एक पूर्ण संख्या में लिखें, जैसे 2।",
    select_product_reprompt: "कृपया सूची से एक उत्पाद चुनें।",
    confirm_header: "ऑर्डर की पुष्टि करें",
    confirm_body: "{quantity} × {product} (प्रत्येक {weight} ग्राम)\nभाव: {rate} प्रति ग्राम\nकुल: {total}",
    confirm_body_no_rate: "{quantity} × {product} (प्रत्येक {weight} ग्राम)\nसोने का भाव अभी उपलब्ध नहीं है, कुल राशि बाद में बताई जाएगी।",
    confirm_button: "पुष्टि करें",
    cancel_button: "रद्द करें",
    use_buttons_reprompt: "कृपया पुष्टि करें या रद्द करें बटन का उपयोग करें।",
    order_placed: "आपका ऑर्डर पक्का हो गया है। ऑर्डर आईडी: {order_id}",
    order_cancelled: "आपका ऑर्डर रद्द कर दिया गया है।",
    language_changed: "भाषा हिंदी में बदल दी गई है।",
};

static TAMIL: Texts = Texts {
    main_menu_header: "முதன்மை மெனு",
    main_menu_body: "கீழே ஒரு விருப்பத்தைத் தேர்ந்தெடுக்கவும்.",
    menu_button: "விருப்பங்கள்",
    menu_section: "மெனு",
    main_menu_rows: [
        row("என் புள்ளிகள்", "உங்கள் வெகுமதி புள்ளிகளைப் பாருங்கள்"),
        row("என் ஆர்டர்கள்", "முந்தைய ஆர்டர்களைப் பாருங்கள்"),
        row("உதவி", "எங்கள் குழுவைத் தொடர்பு கொள்ளுங்கள்"),
        row("மொழியை மாற்று", "வேறு மொழியைத் தேர்ந்தெடுக்கவும்"),
        row("ஆர்டர் செய்", "புதிய ஆர்டரைத் தொடங்குங்கள்"),
    ],
    order_menu_header: "ஆர்டர்",
    order_menu_body: "நீங்கள் என்ன செய்ய விரும்புகிறீர்கள்?",
    order_menu_rows: [
        row("பொருட்களைப் பார்", "எங்கள் தொகுப்பைப் பாருங்கள்"),
        row("பின்செல்", "முதன்மை மெனுவுக்குத் திரும்பு"),
    ],
    product_list_header: "எங்கள் தொகுப்பு",
    product_list_body: "ஒரு பொருளைத் தேர்ந்தெடுக்கவும்.",
    product_button: "பொருட்கள்",
    welcome: "கோல்டன் ஜுவல்ஸுக்கு வரவேற்கிறோம்! இன்றைய தங்க விலை: ஒரு கிராமுக்கு {rate}.\nஆர்டர் செய்ய *order* அல்லது விருப்பங்களுக்கு *menu* என தட்டச்சு செய்யவும்.",
    welcome_no_rate: "கோல்டன் ஜுவல்ஸுக்கு வரவேற்கிறோம்! இன்றைய தங்க விலை தற்போது கிடைக்கவில்லை, சிறிது நேரம் கழித்துப் பாருங்கள்.\nஆர்டர் செய்ய *order* அல்லது விருப்பங்களுக்கு *menu* என தட்டச்சு செய்யவும்.",
    help: "இன்றைய விலைக்கு *hi*, ஆர்டருக்கு *order*, அனைத்து விருப்பங்களுக்கும் *menu* என தட்டச்சு செய்யவும்.",
    points_info: "உங்களிடம் இப்போது வெகுமதி புள்ளிகள் இல்லை.",
    orders_info: "உங்கள் முந்தைய ஆர்டர்கள் விரைவில் இங்கே தோன்றும்.",
    support_info: "உதவிக்கு support@goldenjewels.example க்கு எழுதுங்கள்.",
    quantity_prompt: "உங்களுக்கு எத்தனை {product} வேண்டும்? ஒரு எண்ணுடன் பதிலளிக்கவும்.",
    quantity_reprompt: "அளவை ஒரு முழு எண்ணாக உள்ளிடவும், எ.கா. 2.",
    select_product_reprompt: "பட்டியலிலிருந்து ஒரு பொருளைத் தேர்ந்தெடுக்கவும்.",
    confirm_header: "ஆர்டரை உறுதிப்படுத்தவும்",
    confirm_body: "{quantity} × {product} (ஒவ்வொன்றும் {weight} கிராம்)\nவிலை: ஒரு கிராமுக்கு {rate}\nமொத்தம்: {total}",
    confirm_body_no_rate: "{quantity} × {product} (ஒவ்வொன்றும் {weight} கிராம்)\nதங்க விலை தற்போது கிடைக்கவில்லை, மொத்தத் தொகை பின்னர் உறுதிப்படுத்தப்படும்.",
    confirm_button: "உறுதிப்படுத்து",
    cancel_button: "ரத்து செய்",
    use_buttons_reprompt: "உறுதிப்படுத்து அல்லது ரத்து செய் பொத்தானைப் பயன்படுத்தவும்.",
    order_placed: "உங்கள் ஆர்டர் உறுதிப்படுத்தப்பட்டது. ஆர்டர் எண்: {order_id}",
    order_cancelled: "உங்கள் ஆர்டர் ரத்து செய்யப்பட்டது.",
    language_changed: "மொழி தமிழுக்கு மாற்றப்பட்டது.",
};

static TELUGU: Texts = Texts {
    main_menu_header: "ప్రధాన మెనూ",
    main_menu_body: "క్రింద ఒక ఎంపికను ఎంచుకోండి.",
    menu_button: "ఎంపికలు",
    menu_section: "మెనూ",
    main_menu_rows: [
        row("నా పాయింట్లు", "మీ రివార్డ్ పాయింట్లను చూడండి"),
        row("నా ఆర్డర్లు", "మీ గత ఆర్డర్లను చూడండి"),
        row("సహాయం", "మా బృందాన్ని సంప్రదించండి"),
        row("భాష మార్చండి", "మరొక భాషను ఎంచుకోండి"),
        row("ఆర్డర్ చేయండి", "కొత్త ఆర్డర్ ప్రారంభించండి"),
    ],
    order_menu_header: "ఆర్డర్",
    order_menu_body: "మీరు ఏమి చేయాలనుకుంటున్నారు?",
    order_menu_rows: [
        row("ఉత్పత్తులు చూడండి", "మా కలెక్షన్ చూడండి"),
        row("వెనుకకు", "ప్రధాన మెనూకి తిరిగి వెళ్ళండి"),
    ],
    product_list_header: "మా కలెక్షన్",
    product_list_body: "ఒక ఉత్పత్తిని ఎంచుకోండి.",
    product_button: "ఉత్పత్తులు",
    welcome: "గోల్డెన్ జ్యువెల్స్‌కు స్వాగతం! నేటి బంగారం ధర: గ్రాముకు {rate}.\nఆర్డర్ కోసం *order* లేదా ఎంపికల కోసం *menu* అని టైప్ చేయండి.",
    welcome_no_rate: "గోల్డెన్ జ్యువెల్స్‌కు స్వాగతం! నేటి బంగారం ధర ప్రస్తుతం అందుబాటులో లేదు, కొద్దిసేపటి తర్వాత చూడండి.\nఆర్డర్ కోసం *order* లేదా ఎంపికల కోసం *menu* అని టైప్ చేయండి.",
    help: "నేటి ధర కోసం *hi*, ఆర్డర్ కోసం *order*, అన్ని ఎంపికల కోసం *menu* అని టైప్ చేయండి.",
    points_info: "మీకు ప్రస్తుతం రివార్డ్ పాయింట్లు లేవు.",
    orders_info: "మీ గత ఆర్డర్లు త్వరలో ఇక్కడ కనిపిస్తాయి.",
    support_info: "సహాయం కోసం support@goldenjewels.example కు వ్రాయండి.",
    quantity_prompt: "మీకు ఎన్ని {product} కావాలి? ఒక సంఖ్యతో సమాధానం ఇవ్వండి.",
    quantity_reprompt: "దయచేసి పరిమాణాన్ని పూర్ణ సంఖ్యగా నమోదు చేయండి, ఉదా. 2.",
    select_product_reprompt: "దయచేసి జాబితా నుండి ఒక ఉత్పత్తిని ఎంచుకోండి.",
    confirm_header: "ఆర్డర్ నిర్ధారించండి",
    confirm_body: "{quantity} × {product} (ఒక్కొక్కటి {weight} గ్రా)\nధర: గ్రాముకు {rate}\nమొత్తం: {total}",
    confirm_body_no_rate: "{quantity} × {product} (ఒక్కొక్కటి {weight} గ్రా)\nబంగారం ధర ప్రస్తుతం అందుబాటులో లేదు, మొత్తం తర్వాత నిర్ధారించబడుతుంది.",
    confirm_button: "నిర్ధారించండి",
    cancel_button: "రద్దు చేయండి",
    use_buttons_reprompt: "దయచేసి నిర్ధారించండి లేదా రద్దు చేయండి బటన్లను ఉపయోగించండి.",
    order_placed: "మీ ఆర్డర్ నిర్ధారించబడింది. ఆర్డర్ ఐడి: {order_id}",
    order_cancelled: "మీ ఆర్డర్ రద్దు చేయబడింది.",
    language_changed: "భాష తెలుగుకు మార్చబడింది.",
};

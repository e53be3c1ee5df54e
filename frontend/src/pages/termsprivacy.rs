use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

const LEGAL_STYLES: &str = r#"
.legal-content {
    min-height: 100vh;
    background: linear-gradient(135deg, #f0fdfa, #ffffff, #eff6ff);
    padding: 8rem 2rem 4rem;
    color: #1f2937;
    display: flex;
    flex-direction: column;
    align-items: center;
}
.legal-content h1 {
    font-size: 2.25rem;
    background: linear-gradient(135deg, #009999, #00cccc);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
    margin-bottom: 1rem;
    text-align: center;
}
.legal-content .legal-intro {
    max-width: 800px;
    text-align: center;
    color: #4b5563;
    line-height: 1.7;
}
.legal-content section {
    background: white;
    border-radius: 12px;
    width: 100%;
    max-width: 800px;
    padding: 2rem;
    margin: 1rem auto;
    box-shadow: 0 8px 32px rgba(0, 0, 0, 0.05);
}
.legal-content h2 {
    color: #0f766e;
    font-size: 1.4rem;
    margin: 0 0 1rem;
}
.legal-content h3 {
    color: #0d9488;
    font-size: 1.1rem;
    margin: 1rem 0 0.5rem 0;
}
.legal-content p, .legal-content li {
    color: #4b5563;
    line-height: 1.6;
    margin-bottom: 0.75rem;
}
.legal-content ul {
    list-style-type: none;
    padding-left: 1.5rem;
}
.legal-content li {
    position: relative;
    margin-bottom: 0.5rem;
}
.legal-content li:before {
    content: "•";
    color: #009999;
    position: absolute;
    left: -1.25rem;
}
.legal-content .legal-date {
    margin-top: 2rem;
    color: #6b7280;
    font-size: 0.875rem;
}
.legal-links {
    margin-top: 1rem;
    text-align: center;
}
.legal-links a {
    color: #009999;
    text-decoration: none;
    transition: color 0.3s ease;
}
.legal-links a:hover {
    color: #0f766e;
}
"#;

fn legal_links() -> Html {
    html! {
        <div class="legal-links">
            <Link<Route> to={Route::Home}>{"Home"}</Link<Route>>
            {" | "}
            <Link<Route> to={Route::Terms}>{"Terms & Conditions"}</Link<Route>>
            {" | "}
            <Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>>
        </div>
    }
}

fn contact_lines() -> Html {
    html! {
        <ul>
            <li>{"Email: "}<a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{config::CONTACT_EMAIL}</a></li>
            <li>{"Phone: "}{config::CONTACT_PHONE}</li>
            <li>{"Address: "}{config::CONTACT_ADDRESS}</li>
        </ul>
    }
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <div class="legal-content privacy-policy">
            <style>{LEGAL_STYLES}</style>
            <h1>{"Privacy Policy of Health Seva"}</h1>
            <p class="legal-intro">{"At Health Seva (\"we,\" \"our,\" or \"us\"), we prioritize your privacy and are committed to safeguarding your personal information. This Privacy Policy outlines how we collect, use, disclose, and protect your data when you access our services. By using our services, you agree to the practices described in this policy."}</p>

            <section>
                <h2>{"1. Information We Collect"}</h2>
                <h3>{"a. Personal Information"}</h3>
                <ul>
                    <li>{"Name, address, email address, and phone number."}</li>
                    <li>{"Health-related data, such as medical history and preferences, essential for service delivery."}</li>
                </ul>
                <h3>{"b. Non-Personal Information"}</h3>
                <ul>
                    <li>{"Device details, IP address, browser type, and usage data for improving website and app performance."}</li>
                </ul>
                <h3>{"c. Payment Information"}</h3>
                <ul>
                    <li>{"Billing details and payment methods processed through secure third-party gateways."}</li>
                </ul>
                <h3>{"d. Cookies and Tracking Technologies"}</h3>
                <ul>
                    <li>{"Tools like cookies to enhance your user experience and gather analytics for service improvement. You may disable cookies via your browser settings if desired."}</li>
                </ul>
            </section>

            <section>
                <h2>{"2. How We Use Your Information"}</h2>
                <ul>
                    <li>{"Provide, manage, and enhance our healthcare services."}</li>
                    <li>{"Schedule and deliver health services efficiently."}</li>
                    <li>{"Respond to inquiries and offer customer support."}</li>
                    <li>{"Facilitate secure payment transactions."}</li>
                    <li>{"Comply with legal and regulatory obligations."}</li>
                    <li>{"Personalize your experience with tailored recommendations."}</li>
                </ul>
            </section>

            <section>
                <h2>{"3. Sharing Your Information"}</h2>
                <p>{"We respect your privacy and do not sell your personal data. However, we may share your information in the following instances:"}</p>
                <ul>
                    <li>{"With Healthcare Professionals and Trusted Partners: For delivering services such as medical care, diagnostics, or treatment."}</li>
                    <li>{"With Payment Processors: To securely manage your transactions."}</li>
                    <li>{"Legal Obligations: When required by law or to protect our legal rights."}</li>
                    <li>{"Business Transfers: In the event of mergers, acquisitions, or asset sales."}</li>
                </ul>
            </section>

            <section>
                <h2>{"4. Data Security"}</h2>
                <p>{"While we strive to protect your personal information, we rely on standard precautions to ensure data safety. These include:"}</p>
                <ul>
                    <li>{"Limiting access to authorized personnel."}</li>
                    <li>{"Storing data securely in managed environments."}</li>
                </ul>
                <p>{"However, no method of transmission over the internet is 100% secure, and we cannot guarantee absolute security."}</p>
            </section>

            <section>
                <h2>{"5. Your Rights"}</h2>
                <p>{"You have the following rights regarding your personal data:"}</p>
                <ul>
                    <li>{"Access: Request a copy of the personal information we hold about you."}</li>
                    <li>{"Correction: Request corrections to inaccurate or incomplete data."}</li>
                    <li>{"Deletion: Request deletion of your personal information, subject to legal or contractual obligations."}</li>
                    <li>{"Opt-Out: Withdraw consent for specific uses, such as marketing communications."}</li>
                </ul>
                <p>{format!("To exercise these rights, contact us at {}.", config::CONTACT_EMAIL)}</p>
            </section>

            <section>
                <h2>{"6. Third-Party Links"}</h2>
                <p>{"Our website or app may include links to third-party sites. Health Seva is not responsible for the privacy practices or content of these external websites. We encourage users to review the privacy policies of these sites before sharing any personal information."}</p>
            </section>

            <section>
                <h2>{"7. Children's Privacy"}</h2>
                <p>{"Our services are not intended for individuals under 18 years of age. We do not knowingly collect personal data from minors without parental or guardian consent. Parents are encouraged to monitor their children's use of our services."}</p>
            </section>

            <section>
                <h2>{"8. Changes to This Privacy Policy"}</h2>
                <p>{"We may update this policy periodically to reflect changes in our practices or legal requirements. The revised policy will be posted on our website with an updated effective date. Continued use of our services after updates constitutes acceptance of the revised terms."}</p>
            </section>

            <section>
                <h2>{"9. Contact Us"}</h2>
                <p>{"For any questions or concerns about this Privacy Policy or our data practices, please contact us:"}</p>
                { contact_lines() }
            </section>
            <p class="legal-date">{"Effective Date: 1st January 2025"}</p>
            { legal_links() }
        </div>
    }
}

#[function_component(TermsAndConditions)]
pub fn terms_and_conditions() -> Html {
    html! {
        <div class="legal-content terms-and-conditions">
            <style>{LEGAL_STYLES}</style>
            <h1>{"Terms and Conditions"}</h1>
            <p class="legal-intro">{"Welcome to Health Seva At Your Home. By using our website or services, you agree to abide by the following terms and conditions. Please review them carefully. If you do not accept these terms, please refrain from using our website and services."}</p>

            <section>
                <h2>{"1. Acceptance of Terms"}</h2>
                <ul>
                    <li>{"You are at least 18 years old or have the consent of a legal guardian."}</li>
                    <li>{"You agree to comply with all applicable laws and regulations in connection with the use of our services."}</li>
                </ul>
                <p>{"These terms form a binding agreement between you and Health Seva."}</p>
            </section>

            <section>
                <h2>{"2. Services Provided"}</h2>
                <ul>
                    <li>{"Doctor consultations"}</li>
                    <li>{"Nursing care"}</li>
                    <li>{"Physiotherapy"}</li>
                    <li>{"Medicine delivery"}</li>
                    <li>{"Other health-related services as described on our website"}</li>
                </ul>
                <p>{"Note: Service availability may vary based on your location and the availability of healthcare professionals."}</p>
            </section>

            <section>
                <h2>{"3. User Responsibilities"}</h2>
                <ul>
                    <li>{"Provide accurate and up-to-date information during registration and service requests."}</li>
                    <li>{"Ensure the safety and respect of healthcare professionals during home visits."}</li>
                    <li>{"Use the services solely for lawful purposes."}</li>
                    <li>{"Follow all instructions and advice provided by healthcare professionals for optimal outcomes."}</li>
                    <li>{"Maintain a clean and suitable home environment for healthcare services."}</li>
                </ul>
            </section>

            <section>
                <h2>{"4. Booking and Payments"}</h2>
                <ul>
                    <li>{"Services can be booked via our website, mobile application, or by calling us."}</li>
                    <li>{"Payments must be completed before or during service delivery using approved methods such as online transfers, UPI, or cash unless specified otherwise."}</li>
                    <li>{"Failure to make timely payments may result in the cancellation of booked services."}</li>
                    <li>{"Cancellations or rescheduling requests must be communicated promptly to Health Seva through available contact methods. Refunds or rescheduling will be handled on a case-by-case basis."}</li>
                </ul>
            </section>

            <section>
                <h2>{"5. Privacy Policy"}</h2>
                <p>
                    {"How we handle your personal and health information is described in our "}
                    <Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>>
                    {"."}
                </p>
            </section>

            <section>
                <h2>{"6. Service Limitations"}</h2>
                <ul>
                    <li>{"Health Seva does not replace hospital services such as surgeries, critical care, or ICU treatments."}</li>
                    <li>{"We provide only those services that can be delivered at home."}</li>
                    <li>{"Services requiring heavy equipment like USG or CT scans are not offered."}</li>
                    <li>{"Service availability depends on the healthcare professionals available in your area."}</li>
                </ul>
            </section>

            <section>
                <h2>{"7. Disclaimer of Liability"}</h2>
                <ul>
                    <li>{"Healthcare professionals engaged by Health Seva are responsible for providing care in accordance with standard medical practices and professional guidelines. However, Health Seva does not guarantee specific treatment outcomes, as these depend on individual patient conditions and circumstances."}</li>
                    <li>{"Health Seva and its healthcare professionals are not liable for any mishaps, emergencies, or natural outcomes that may occur during or after services are provided, including but not limited to the unfortunate passing of a dependent."}</li>
                    <li>{"Health Seva is not responsible for delays or interruptions in service caused by factors beyond our control, such as natural disasters, strikes, or technical issues."}</li>
                    <li>{"By availing of our services, you acknowledge and accept these limitations and understand that outcomes may vary based on patient conditions, adherence to medical advice, and other factors."}</li>
                </ul>
            </section>

            <section>
                <h2>{"8. Emergency Services"}</h2>
                <p>{"Health Seva is not an emergency healthcare provider. In case of medical emergencies, users are advised to contact emergency services immediately (e.g., 112)."}</p>
            </section>

            <section>
                <h2>{"9. Termination of Services"}</h2>
                <p>{"Health Seva reserves the right to suspend or terminate services under the following conditions:"}</p>
                <ul>
                    <li>{"Violation of these terms and conditions."}</li>
                    <li>{"Detection of fraudulent or inappropriate activities."}</li>
                    <li>{"Concerns over safety or legal issues."}</li>
                </ul>
                <p>{"Users will be notified of service termination via their registered contact details."}</p>
            </section>

            <section>
                <h2>{"10. Changes to Terms"}</h2>
                <p>{"We may update these terms from time to time. Updated terms will be posted on our website. Continued use of our services after updates indicates acceptance of the revised terms. Users are encouraged to review these terms periodically to stay informed about changes."}</p>
            </section>

            <section>
                <h2>{"11. Governing Law"}</h2>
                <p>{"These terms are governed by the laws of Bihar, India. Any disputes arising out of these terms will be settled in the courts of Patna."}</p>
            </section>

            <section>
                <h2>{"12. Feedback and Complaints"}</h2>
                <p>{"We value your feedback. If you have any complaints or suggestions, please contact us through the details provided below."}</p>
            </section>

            <section>
                <h2>{"13. Contact Us"}</h2>
                { contact_lines() }
                <p>{"Thank you for choosing Health Seva. We are committed to providing quality care at your home."}</p>
            </section>
            <p class="legal-date">{"Last updated: July 2025"}</p>
            { legal_links() }
        </div>
    }
}
